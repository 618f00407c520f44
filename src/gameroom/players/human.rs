use crate::*;
use crate::game::*;
use crate::gameroom::*;
use colored::*;
use dialoguer::Confirm;
use dialoguer::Select;

/// Terminal player. Renders each view and prompts for a tap.
///
/// Prompts block, so they run on the blocking pool while the room keeps
/// ticking. A tap that lands after the round ended is simply dropped.
#[derive(Debug, Default)]
pub struct Human;

impl Human {
    fn board(view: &View) -> String {
        let target = format!(" {:^5} ", view.target);
        let target = match view.status {
            Status::Playing => target.white().on_bright_black(),
            Status::Won => target.white().on_green(),
            Status::Lost => target.white().on_red(),
        };
        let numbers = view
            .numbers
            .iter()
            .map(|n| match n.disabled {
                true => format!(" {:>2} ", n.value).dimmed(),
                false => format!(" {:>2} ", n.value).bold(),
            })
            .map(|s| s.to_string())
            .collect::<Vec<String>>()
            .join(" ");
        format!(
            "\n{}\n{}\n{}",
            target.bold(),
            numbers,
            format!("Time Remaining: {} sec", view.remaining).bright_white()
        )
    }

    fn prompt(items: Vec<String>) -> Option<usize> {
        Select::new()
            .with_prompt("Tap a number")
            .report(false)
            .items(items.as_slice())
            .default(0)
            .interact()
            .inspect_err(|e| log::warn!("prompt failed: {}", e))
            .ok()
    }
}

#[async_trait::async_trait]
impl Player for Human {
    async fn decide(&mut self, view: &View) -> Option<Position> {
        let open = view.enabled().map(|n| n.position).collect::<Vec<Position>>();
        let items = std::iter::once(String::from("wait"))
            .chain(open.iter().map(|&p| view.numbers[p].value.to_string()))
            .collect::<Vec<String>>();
        tokio::task::spawn_blocking(move || Self::prompt(items))
            .await
            .inspect_err(|e| log::warn!("prompt task failed: {}", e))
            .ok()
            .flatten()
            .and_then(|choice| choice.checked_sub(1))
            .and_then(|i| open.get(i).copied())
    }

    async fn notify(&mut self, event: &Event) {
        match event {
            Event::Start { round, view } => {
                println!("\n{}", format!("ROUND {}", round).bold());
                println!("{}", Self::board(view));
            }
            Event::Update { view, .. } => println!("{}", Self::board(view)),
            Event::Ended { status, .. } => {
                let title = status.title().unwrap_or_default();
                let message = status.message().unwrap_or_default();
                match status {
                    Status::Won => println!("\n{}\n{}", title.green().bold(), message),
                    _ => println!("\n{}\n{}", title.red().bold(), message),
                }
            }
        }
    }

    async fn again(&mut self, _: Status) -> bool {
        tokio::task::spawn_blocking(|| {
            Confirm::new()
                .with_prompt("Play Again?")
                .default(true)
                .interact()
                .inspect_err(|e| log::warn!("prompt failed: {}", e))
                .unwrap_or(false)
        })
        .await
        .unwrap_or(false)
    }
}
