use clap::Parser;
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "emotion-cli")]
#[command(about = "Submit a reflection to the Emotion Analysis API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    /// Reflection text; multiple words are joined with spaces.
    #[arg(required = true)]
    text: Vec<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/analyze", cli.url.trim_end_matches('/')))
        .json(&json!({ "text": cli.text.join(" ") }))
        .send()
        .await?;

    let body: Value = res.json().await?;
    if body["error"].as_bool().unwrap_or(false) {
        let message = body["message"]
            .as_str()
            .unwrap_or("An error occurred while analyzing your reflection.");
        eprintln!("Error: {}", message);
        std::process::exit(1);
    }

    print_analysis(&body);
    Ok(())
}

fn emoji(emotion: &str) -> &'static str {
    match emotion.to_lowercase().as_str() {
        "anxious" => "😰",
        "happy" => "😊",
        "sad" => "😢",
        "angry" => "😠",
        "calm" => "😌",
        "confident" => "💪",
        _ => "🤔",
    }
}

fn print_analysis(body: &Value) {
    let emotion = body["emotion"].as_str().unwrap_or("Unknown");
    let confidence = body["confidence"].as_f64().unwrap_or(0.0);

    println!("{} {} ({}% confidence)", emoji(emotion), emotion, (confidence * 100.0).round());
    println!();
    println!("{}", body["analysis"].as_str().unwrap_or_default());

    if let Some(suggestions) = body["suggestions"].as_array() {
        println!();
        println!("Suggestions:");
        for (i, suggestion) in suggestions.iter().enumerate() {
            println!("  {}. {}", i + 1, suggestion.as_str().unwrap_or_default());
        }
    }
}
