//! debate-coach CLI
//!
//! Usage:
//!   debate-coach                                 # Suggest a topic, then debate
//!   debate-coach --topic "교복을 폐지해야 한다"    # Skip topic suggestion
//!   debate-coach --model openai/gpt-4o-mini      # Use another model
//!   RUST_LOG=debug debate-coach                  # Log remote calls to stderr

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use debate_coach::core::{
    request_feedback, save_session, suggest_topic, Console, DebateRunner, OpenRouterClient,
    StdConsole,
};
use debate_coach::types::{RandomStances, Session, SessionSettings};
use debate_coach::{
    DebateError, DEFAULT_CATEGORY, DEFAULT_DIFFICULTY, DEFAULT_ENDPOINT, DEFAULT_MAX_SUGGESTIONS,
    DEFAULT_MODEL, DEFAULT_OUTPUT_DIR, DEFAULT_USER_LEVEL, VERSION,
};

#[derive(Parser, Debug)]
#[command(
    name = "debate-coach",
    version = VERSION,
    about = "Practice a pro/con debate against a chat model and get feedback",
    long_about = "Runs an eight-turn debate (opening, rebuttal, counter-rebuttal, closing;\n\
                  pro side first in each stage). Your side is drawn at random, the model\n\
                  argues the other side, and the transcript plus feedback is saved as JSON."
)]
struct Args {
    /// Model identifier sent to the chat endpoint
    #[arg(long, default_value = DEFAULT_MODEL)]
    model: String,

    /// Chat-completions endpoint URL
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    endpoint: String,

    /// Base directory for saved sessions
    #[arg(long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: String,

    /// Give up after this many rejected topic suggestions
    #[arg(long, default_value_t = DEFAULT_MAX_SUGGESTIONS)]
    max_suggestions: usize,

    /// Debate this topic instead of asking for suggestions
    #[arg(long)]
    topic: Option<String>,

    /// Disable colors in output
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(e) = run(&args).await {
        eprintln!("Error [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}

async fn run(args: &Args) -> Result<(), DebateError> {
    let mut console = StdConsole::new(args.no_color);
    print_header();

    let api_key = console.prompt("API 키를 입력하세요: ")?.trim().to_string();
    let user_level = console.prompt(&format!("사용자 수준 (기본: {}): ", DEFAULT_USER_LEVEL))?;
    let difficulty = console.prompt(&format!("난이도 상/중/하 (기본: {}): ", DEFAULT_DIFFICULTY))?;
    let category = console.prompt(&format!("토론 분야 (기본: {}): ", DEFAULT_CATEGORY))?;
    let settings = SessionSettings::from_answers(&category, &user_level, &difficulty);

    let client = OpenRouterClient::new(api_key)
        .with_model(args.model.as_str())
        .with_endpoint(args.endpoint.as_str());

    let topic = match &args.topic {
        Some(topic) => topic.clone(),
        None => suggest_topic(&client, &mut console, &settings, args.max_suggestions).await?,
    };

    let mut session = Session::new(topic, settings, &mut RandomStances::thread());
    DebateRunner::new(&client, &mut console).run(&mut session).await?;

    console.banner("토론 피드백");
    console.say("피드백 작성 중...");
    let feedback = request_feedback(&client, &mut session).await?;
    console.say(&feedback);

    let path = save_session(&session, &args.output_dir)?;
    let saved = format!("\n토론 기록이 저장되었습니다: {}", path.display());
    console.say(&saved.green().to_string());
    Ok(())
}

fn print_header() {
    let title = format!("debate-coach v{} - 토론 연습", VERSION);
    println!("{}", "========================================".bold());
    println!("  {}", title.bold());
    println!("{}", "========================================".bold());
    println!();
}
