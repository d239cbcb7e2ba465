// Interactive terminal chat: reads a line, dispatches the literal commands,
// forwards everything else to the gateway and prints the reply.

use std::future::Future;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use chrono::Local;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{error, info};

use crate::catalog::Catalog;
use crate::gateway::ChatGateway;
use crate::map::MapRenderer;
use crate::report;

pub const WELCOME_TEXT: &str = r#"
╔══════════════════════════════════════════════════════════════════════════════════╗
║                    🥤 PERTH CONTAINER FINDER CHATBOT 🥤                         ║
║                                                                                  ║
║    Find cans, bottles & containers around Perth, WA! 💰 10¢ per container       ║
║                                                                                  ║
║  📍 Ask about specific locations: "Where can I find cans at Cottesloe Beach?"   ║
║  🗺️  Get area recommendations: "Best places for container collection"           ║
║  💰 Find collection points: "Where can I cash in containers?"                   ║
║  📊 Check litter hotspots: "Show me high-density areas"                         ║
║                                                                                  ║
║  Commands: 'map' = generate map | 'quit' = exit | 'help' = show commands         ║
╚══════════════════════════════════════════════════════════════════════════════════╝
"#;

pub const HELP_TEXT: &str = r#"
🆘 CONTAINER FINDER HELP:

📍 LOCATION QUERIES:
  • "Where can I find cans at Cottesloe Beach?"
  • "Best spots for containers in Fremantle?"
  • "Northbridge container collection areas?"

🗺️  GENERAL QUERIES:
  • "Show me the best container hotspots"
  • "Where are the highest density areas?"
  • "Best times to collect containers?"

💰 COLLECTION POINTS:
  • "Where can I cash in my containers?"
  • "Nearest collection points to [location]?"
  • "24/7 collection points in Perth?"

🛠️  COMMANDS:
  • 'map' - Generate interactive HTML map
  • 'stats' - Show collection statistics
  • 'help' - Show this help message
  • 'quit' - Exit the chatbot

💡 TIPS:
  • Be specific about locations for better results
  • Ask about peak times for maximum efficiency
  • Mention nearby areas for broader search
"#;

pub const PROMPT: &str = "\n🤖 You: ";
pub const EMPTY_INPUT_NOTICE: &str = "💭 Please enter a question or command!";
pub const QUIT_FAREWELL: &str = "👋 Thanks for using Perth Container Finder! Happy collecting! 💰";
pub const INTERRUPT_FAREWELL: &str = "👋 Goodbye! Happy container collecting! 💰";

/// One line of user input, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Quit,
    Help,
    Map,
    Stats,
    Empty,
    Ask(&'a str),
}

impl<'a> ReplCommand<'a> {
    /// Commands are matched on the whole trimmed line, ignoring case.
    pub fn parse(input: &'a str) -> Self {
        let input = input.trim();
        match input.to_lowercase().as_str() {
            "quit" | "exit" | "q" => Self::Quit,
            "help" => Self::Help,
            "map" => Self::Map,
            "stats" => Self::Stats,
            "" => Self::Empty,
            _ => Self::Ask(input),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatOptions {
    /// Pause between printed characters of a reply; zero prints it at once.
    pub typing_delay: Duration,
    /// Where the `map` command writes its pages.
    pub map_dir: PathBuf,
}

/// Runs the chat on the process's stdin/stdout until quit, EOF or Ctrl-C.
pub async fn run_chat(gateway: ChatGateway, options: ChatOptions) -> Result<()> {
    let input = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl-C: {:?}", e);
            std::future::pending::<()>().await;
        }
    };
    run_session(gateway, input, &mut stdout, &options, ctrl_c).await
}

/// The chat loop over arbitrary input and output. `shutdown` resolving ends
/// the session the same way Ctrl-C does.
pub async fn run_session<R, W, S>(
    mut gateway: ChatGateway,
    input: R,
    out: &mut W,
    options: &ChatOptions,
    shutdown: S,
) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: Write,
    S: Future<Output = ()>,
{
    info!("Starting interactive chat session...");
    tokio::pin!(shutdown);
    let mut lines = input.lines();

    writeln!(out, "{}", WELCOME_TEXT)?;

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let line = tokio::select! {
            _ = &mut shutdown => {
                writeln!(out, "\n\n{}", INTERRUPT_FAREWELL)?;
                break;
            }
            line = lines.next_line() => line.context("Failed to read chat input")?,
        };

        let Some(line) = line else {
            info!("Input closed");
            writeln!(out, "\n\n{}", INTERRUPT_FAREWELL)?;
            break;
        };

        match ReplCommand::parse(&line) {
            ReplCommand::Quit => {
                writeln!(out, "\n{}", QUIT_FAREWELL)?;
                break;
            }
            ReplCommand::Help => writeln!(out, "{}", HELP_TEXT)?,
            ReplCommand::Map => generate_map(gateway.catalog(), &options.map_dir, out)?,
            ReplCommand::Stats => write!(out, "{}", report::chat_stats(gateway.catalog()))?,
            ReplCommand::Empty => writeln!(out, "{}", EMPTY_INPUT_NOTICE)?,
            ReplCommand::Ask(question) => {
                write!(out, "\n🤖 Assistant: ")?;
                out.flush()?;
                let reply = tokio::select! {
                    _ = &mut shutdown => {
                        writeln!(out, "\n\n{}", INTERRUPT_FAREWELL)?;
                        break;
                    }
                    reply = gateway.send(question) => reply,
                };
                tokio::select! {
                    _ = &mut shutdown => {
                        writeln!(out, "\n\n{}", INTERRUPT_FAREWELL)?;
                        break;
                    }
                    typed = type_out(out, &reply, options.typing_delay) => typed?,
                }
            }
        }
    }

    info!("Chat session finished.");
    Ok(())
}

fn generate_map<W: Write>(catalog: &Catalog, dir: &Path, out: &mut W) -> std::io::Result<()> {
    writeln!(out, "\n🗺️  Generating interactive map...")?;
    let saved = MapRenderer::new()
        .and_then(|renderer| renderer.save_timestamped(catalog, dir, Local::now().naive_local()));
    match saved {
        Ok(path) => {
            writeln!(out, "✅ Map saved as: {}", path.display())?;
            writeln!(out, "💻 Open in browser to view interactive map!")?;
        }
        Err(e) => {
            error!(error = %e, "Map generation failed");
            writeln!(out, "❌ Error generating map: {}", e)?;
        }
    }
    Ok(())
}

async fn type_out<W: Write>(out: &mut W, text: &str, delay: Duration) -> std::io::Result<()> {
    if delay.is_zero() {
        writeln!(out, "{}", text)?;
        return out.flush();
    }
    for ch in text.chars() {
        write!(out, "{}", ch)?;
        out.flush()?;
        tokio::time::sleep(delay).await;
    }
    writeln!(out)
}
