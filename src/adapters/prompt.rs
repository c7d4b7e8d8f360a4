use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Stdin};
use tokio::sync::Mutex;

use crate::domain::model::{
    ConfirmIntent, ConfirmRequest, DialogRequest, DialogResponse, DialogSeed, Ingredient,
};
use crate::domain::ports::DialogGateway;
use crate::utils::error::Result;

/// Terminal stand-in for the host dialog layer. Each record is one JSON value
/// per line; a blank line cancels, and bulk entry ends at a blank line or EOF.
/// One buffered reader is shared across calls so piped input is not swallowed
/// between dialogs.
pub struct PromptDialogGateway {
    input: Mutex<BufReader<Stdin>>,
}

impl PromptDialogGateway {
    pub fn new() -> Self {
        Self {
            input: Mutex::new(BufReader::new(tokio::io::stdin())),
        }
    }

    async fn next_line(&self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.lock().await.read_line(&mut line).await?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn print_seed(seed: &DialogSeed) {
        match seed {
            DialogSeed::Empty => {}
            DialogSeed::Ingredient(row) => println!("  current: {}", row.value()),
            DialogSeed::Rows(rows) => {
                for (index, row) in rows.iter().enumerate() {
                    println!("  [{}] {}", index, row.value());
                }
            }
        }
    }
}

impl Default for PromptDialogGateway {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DialogGateway for PromptDialogGateway {
    async fn open_dialog(&self, request: DialogRequest) -> Result<DialogResponse> {
        println!("── {} ──", request.title);
        Self::print_seed(&request.seed);

        match request.seed {
            DialogSeed::Rows(_) => {
                println!("Enter one ingredient JSON per line, blank line to finish:");
                let mut rows = Vec::new();
                loop {
                    match self.next_line().await? {
                        None => break,
                        Some(line) if line.is_empty() => break,
                        Some(line) => rows.push(Ingredient::from_json(&line)?),
                    }
                }
                if rows.is_empty() {
                    Ok(DialogResponse::Cancelled)
                } else {
                    Ok(DialogResponse::Rows(rows))
                }
            }
            _ => {
                println!("Enter ingredient JSON (blank line cancels):");
                match self.next_line().await? {
                    None => Ok(DialogResponse::Cancelled),
                    Some(line) if line.is_empty() => Ok(DialogResponse::Cancelled),
                    Some(line) => Ok(DialogResponse::Ingredient(Ingredient::from_json(&line)?)),
                }
            }
        }
    }

    async fn open_confirm(&self, request: ConfirmRequest) -> Result<bool> {
        let marker = match request.intent {
            ConfirmIntent::Positive => "❓",
            ConfirmIntent::Negative => "⚠️",
        };
        println!("{} {}", marker, request.title);
        println!("{}", request.message);
        println!("[y] {}  [n] {}", request.confirm_label, request.cancel_label);

        match self.next_line().await? {
            Some(line) => Ok(matches!(line.to_lowercase().as_str(), "y" | "yes")),
            None => Ok(false),
        }
    }
}
