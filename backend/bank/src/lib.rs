//! # Species Bank
//!
//! Fixed seed list used to populate an empty catalog on first initialization.
//!
//! ## Notes
//! - 30 species, mostly North American, difficulty 1 (common) to 3 (easily confused)
//! - Latin names are unique, image URLs are not (some photos are shared placeholders)
//! - Order is irrelevant to the catalog, ids are assigned by the store on insert

pub struct Species {
    pub common_name: &'static str,
    pub latin_name: &'static str,
    pub image_url: &'static str,
    pub difficulty: i64,
}

pub const SPECIES_COUNT: usize = 30;

pub fn species() -> &'static [Species] {
    &SPECIES
}

static SPECIES: [Species; SPECIES_COUNT] = [
    Species {
        common_name: "Monarch",
        latin_name: "Danaus plexippus",
        image_url: "https://images.unsplash.com/photo-1560263816-d704d83cce0f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwxfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 1,
    },
    Species {
        common_name: "Blue Morpho",
        latin_name: "Morpho menelaus",
        image_url: "https://images.unsplash.com/photo-1599631438215-75bc2640feb8?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwyfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Painted Lady",
        latin_name: "Vanessa cardui",
        image_url: "https://images.unsplash.com/photo-1533048324814-79b0a31982f1?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwzfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 1,
    },
    Species {
        common_name: "Red Admiral",
        latin_name: "Vanessa atalanta",
        image_url: "https://images.unsplash.com/photo-1564514476902-542f8c30121e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHw0fHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Tiger Swallowtail",
        latin_name: "Papilio glaucus",
        image_url: "https://images.unsplash.com/photo-1702338354821-0ea4fb0221e3?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwxfHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 1,
    },
    Species {
        common_name: "Black Swallowtail",
        latin_name: "Papilio polyxenes",
        image_url: "https://images.unsplash.com/photo-1657244670691-ec73025cf69e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwyfHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Spicebush Swallowtail",
        latin_name: "Papilio troilus",
        image_url: "https://images.unsplash.com/photo-1728946737947-3e1908c3750a?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwzfHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Pipevine Swallowtail",
        latin_name: "Battus philenor",
        image_url: "https://images.unsplash.com/photo-1628181150173-f5f355d15f28?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHw0fHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Zebra Swallowtail",
        latin_name: "Eurytides marcellus",
        image_url: "https://images.pexels.com/photos/2671074/pexels-photo-2671074.jpeg",
        difficulty: 2,
    },
    Species {
        common_name: "Common Buckeye",
        latin_name: "Junonia coenia",
        image_url: "https://images.unsplash.com/photo-1623615412998-c63b6d5fe9be?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwxfHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Pearl Crescent",
        latin_name: "Phyciodes tharos",
        image_url: "https://images.unsplash.com/photo-1484704193309-27eaa53936a7?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwyfHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Question Mark",
        latin_name: "Polygonia interrogationis",
        image_url: "https://images.unsplash.com/photo-1509715513011-e394f0cb20c4?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwzfHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Mourning Cloak",
        latin_name: "Nymphalis antiopa",
        image_url: "https://images.unsplash.com/photo-1592861377549-3586948b6a74?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHw0fHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Viceroy",
        latin_name: "Limenitis archippus",
        image_url: "https://images.pexels.com/photos/28749528/pexels-photo-28749528.jpeg",
        difficulty: 2,
    },
    Species {
        common_name: "Gulf Fritillary",
        latin_name: "Agraulis vanillae",
        image_url: "https://images.unsplash.com/photo-1560263816-d704d83cce0f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwxfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Great Spangled Fritillary",
        latin_name: "Speyeria cybele",
        image_url: "https://images.unsplash.com/photo-1533048324814-79b0a31982f1?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwzfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Cabbage White",
        latin_name: "Pieris rapae",
        image_url: "https://images.unsplash.com/photo-1702338354821-0ea4fb0221e3?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwxfHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 1,
    },
    Species {
        common_name: "Clouded Sulphur",
        latin_name: "Colias philodice",
        image_url: "https://images.unsplash.com/photo-1728946737947-3e1908c3750a?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwzfHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Orange Sulphur",
        latin_name: "Colias eurytheme",
        image_url: "https://images.unsplash.com/photo-1628181150173-f5f355d15f28?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHw0fHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Cloudless Sulphur",
        latin_name: "Phoebis sennae",
        image_url: "https://images.unsplash.com/photo-1564514476902-542f8c30121e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHw0fHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Eastern Comma",
        latin_name: "Polygonia comma",
        image_url: "https://images.unsplash.com/photo-1599631438215-75bc2640feb8?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwyfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "American Lady",
        latin_name: "Vanessa virginiensis",
        image_url: "https://images.unsplash.com/photo-1623615412998-c63b6d5fe9be?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwxfHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Common Checkered-Skipper",
        latin_name: "Pyrgus communis",
        image_url: "https://images.unsplash.com/photo-1484704193309-27eaa53936a7?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwyfHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Silver-spotted Skipper",
        latin_name: "Epargyreus clarus",
        image_url: "https://images.unsplash.com/photo-1509715513011-e394f0cb20c4?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHwzfHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Gray Hairstreak",
        latin_name: "Strymon melinus",
        image_url: "https://images.unsplash.com/photo-1592861377549-3586948b6a74?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDQ2NDJ8MHwxfHNlYXJjaHw0fHxtb25hcmNofGVufDB8fHx8MTc2MzAzMzc4NHww&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Spring Azure",
        latin_name: "Celastrina ladon",
        image_url: "https://images.pexels.com/photos/2671074/pexels-photo-2671074.jpeg",
        difficulty: 2,
    },
    Species {
        common_name: "Eastern Tailed-Blue",
        latin_name: "Cupido comyntas",
        image_url: "https://images.pexels.com/photos/28749528/pexels-photo-28749528.jpeg",
        difficulty: 3,
    },
    Species {
        common_name: "Little Yellow",
        latin_name: "Pyrisitia lisa",
        image_url: "https://images.unsplash.com/photo-1657244670691-ec73025cf69e?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NTY2Njd8MHwxfHNlYXJjaHwyfHxzd2FsbG93dGFpbHxlbnwwfHx8fDE3NjMwMzM3ODl8MA&ixlib=rb-4.1.0&q=85",
        difficulty: 2,
    },
    Species {
        common_name: "Hackberry Emperor",
        latin_name: "Asterocampa celtis",
        image_url: "https://images.unsplash.com/photo-1560263816-d704d83cce0f?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwxfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
    Species {
        common_name: "Red-spotted Purple",
        latin_name: "Limenitis arthemis",
        image_url: "https://images.unsplash.com/photo-1599631438215-75bc2640feb8?crop=entropy&cs=srgb&fm=jpg&ixid=M3w3NDk1Nzd8MHwxfHNlYXJjaHwyfHxidXR0ZXJmbHl8ZW58MHx8fHwxNzYzMDMzNzUzfDA&ixlib=rb-4.1.0&q=85",
        difficulty: 3,
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::{SPECIES_COUNT, species};

    #[test]
    fn test_count() {
        assert_eq!(species().len(), SPECIES_COUNT);
    }

    #[test]
    fn test_no_empty_fields() {
        for s in species() {
            assert!(!s.common_name.trim().is_empty());
            assert!(!s.latin_name.trim().is_empty());
            assert!(s.image_url.starts_with("https://"));
            assert!((1..=3).contains(&s.difficulty), "{}", s.common_name);
        }
    }

    #[test]
    fn test_unique_names() {
        let latin: HashSet<_> = species().iter().map(|s| s.latin_name).collect();
        let common: HashSet<_> = species().iter().map(|s| s.common_name).collect();

        assert_eq!(latin.len(), SPECIES_COUNT);
        assert_eq!(common.len(), SPECIES_COUNT);
    }

    #[test]
    fn test_binomial_latin_names() {
        for s in species() {
            assert_eq!(s.latin_name.split_whitespace().count(), 2, "{}", s.latin_name);
        }
    }
}
