use std::{collections::HashSet, process::ExitCode, time::Duration};

use anyhow::{Context, Result, bail, ensure};
use clap::Parser;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

const QUIZ_ROUNDS: usize = 5;

#[derive(Parser, Debug)]
#[command(author, version, about = "Smoke test a running butterfly quiz API")]
struct Args {
    #[arg(default_value = "http://localhost:8001/api")]
    base_url: String,

    #[arg(long, default_value_t = 10)]
    timeout_secs: u64,
}

struct Tester {
    client: Client,
    base_url: String,
    created_id: Option<String>,
}

impl Tester {
    fn new(args: &Args) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(args.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            base_url: args.base_url.trim_end_matches('/').to_string(),
            created_id: None,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn json(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;

        if status != StatusCode::OK {
            bail!("HTTP {status}: {body}");
        }

        serde_json::from_str(&body).context("response is not JSON")
    }

    async fn get(&self, path: &str) -> Result<Value> {
        let response = self.client.get(self.url(path)).send().await?;
        self.json(response).await
    }

    async fn health(&mut self) -> Result<()> {
        let body = self.get("/").await?;
        ensure!(body["message"].is_string(), "missing message: {body}");

        Ok(())
    }

    async fn init(&mut self) -> Result<()> {
        let response = self.client.post(self.url("/init-butterflies")).send().await?;
        let body = self.json(response).await?;
        let message = body["message"].as_str().unwrap_or_default();

        ensure!(
            message.contains("Successfully initialized") || message.contains("already initialized"),
            "unexpected init response: {body}"
        );
        println!("  first call: {message}");

        let response = self.client.post(self.url("/init-butterflies")).send().await?;
        let body = self.json(response).await?;
        let message = body["message"].as_str().unwrap_or_default();

        ensure!(
            message.contains("already initialized"),
            "second init did not report existing catalog: {body}"
        );

        Ok(())
    }

    async fn list(&mut self) -> Result<()> {
        let body = self.get("/butterflies").await?;
        let butterflies = body.as_array().context("expected an array")?;

        ensure!(butterflies.len() >= 30, "only {} butterflies", butterflies.len());

        let mut ids = HashSet::new();
        for butterfly in butterflies {
            for field in ["id", "commonName", "latinName", "imageUrl"] {
                let value = butterfly[field].as_str().unwrap_or_default();
                ensure!(!value.is_empty(), "empty {field} in {butterfly}");
            }
            ids.insert(butterfly["id"].as_str().unwrap_or_default().to_string());
        }

        ensure!(ids.len() == butterflies.len(), "duplicate ids");
        println!("  {} butterflies", butterflies.len());

        Ok(())
    }

    async fn quiz(&mut self) -> Result<()> {
        for round in 1..=QUIZ_ROUNDS {
            let body = self.get("/quiz/question").await?;
            let correct = body["correctAnswer"]["id"].as_str().context("no correct answer")?;
            let options = body["options"].as_array().context("no options")?;

            let ids: HashSet<_> = options.iter().filter_map(|o| o["id"].as_str()).collect();

            ensure!(options.len() == 5, "round {round}: {} options", options.len());
            ensure!(ids.len() == 5, "round {round}: duplicate options");
            ensure!(ids.contains(correct), "round {round}: answer not among options");
        }

        Ok(())
    }

    async fn admin_list(&mut self) -> Result<()> {
        let body = self.get("/admin/butterflies").await?;
        let butterflies = body.as_array().context("expected an array")?;

        ensure!(
            butterflies.iter().all(|b| b["difficulty"].is_i64()),
            "missing difficulty"
        );

        Ok(())
    }

    async fn create(&mut self) -> Result<()> {
        let payload = test_butterfly(2);
        let response = self
            .client
            .post(self.url("/admin/butterfly"))
            .json(&payload)
            .send()
            .await?;
        let body = self.json(response).await?;

        for field in ["commonName", "latinName", "imageUrl", "difficulty"] {
            ensure!(body[field] == payload[field], "{field} not echoed: {body}");
        }

        let id = body["id"].as_str().context("no id assigned")?;
        println!("  created {id}");
        self.created_id = Some(id.to_string());

        Ok(())
    }

    async fn update(&mut self) -> Result<()> {
        let id = self.created_id.clone().context("nothing created")?;
        let payload = test_butterfly(3);

        let response = self
            .client
            .put(self.url(&format!("/admin/butterfly/{id}")))
            .json(&payload)
            .send()
            .await?;
        let body = self.json(response).await?;

        ensure!(body["id"] == id.as_str(), "id changed: {body}");
        ensure!(body["difficulty"] == 3, "difficulty not updated: {body}");
        ensure!(body["commonName"] == payload["commonName"], "name changed: {body}");

        Ok(())
    }

    async fn delete(&mut self) -> Result<()> {
        let id = self.created_id.take().context("nothing created")?;
        let path = format!("/admin/butterfly/{id}");

        let response = self.client.delete(self.url(&path)).send().await?;
        self.json(response).await?;

        let body = self.get("/admin/butterflies").await?;
        let still_there = body
            .as_array()
            .context("expected an array")?
            .iter()
            .any(|b| b["id"] == id.as_str());
        ensure!(!still_there, "{id} still listed after delete");

        let response = self.client.delete(self.url(&path)).send().await?;
        ensure!(
            response.status() == StatusCode::NOT_FOUND,
            "second delete returned {}",
            response.status()
        );

        Ok(())
    }
}

fn test_butterfly(difficulty: i64) -> Value {
    json!({
        "commonName": "Test Butterfly",
        "latinName": "Testus butterflii",
        "imageUrl": "https://example.com/test.jpg",
        "difficulty": difficulty
    })
}

macro_rules! check {
    ($tester:expr, $results:expr, $name:literal, $step:ident) => {{
        println!("Testing {}...", $name);
        let outcome = $tester.$step().await;
        match &outcome {
            Ok(()) => println!("  ok"),
            Err(e) => println!("  FAILED: {e:#}"),
        }
        $results.push(($name, outcome.is_ok()));
    }};
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();
    let mut tester = Tester::new(&args)?;
    let mut results: Vec<(&str, bool)> = Vec::new();

    println!("Testing {}\n", tester.base_url);

    check!(tester, results, "health", health);
    if !results[0].1 {
        println!("\nAPI not reachable, stopping.");
        return Ok(ExitCode::FAILURE);
    }

    check!(tester, results, "init-butterflies", init);
    check!(tester, results, "butterflies", list);
    check!(tester, results, "quiz/question", quiz);
    check!(tester, results, "admin/butterflies", admin_list);
    check!(tester, results, "create", create);
    check!(tester, results, "update", update);
    check!(tester, results, "delete", delete);

    let failed: Vec<_> = results.iter().filter(|(_, ok)| !ok).collect();

    println!("\nPassed: {}/{}", results.len() - failed.len(), results.len());
    for (name, _) in &failed {
        println!("Failed: {name}");
    }

    Ok(if failed.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
