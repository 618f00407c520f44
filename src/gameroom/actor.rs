use super::*;
use crate::*;
use crate::game::*;
use std::collections::VecDeque;
use tokio::sync::mpsc::*;

/// Wrapper that runs a Player in its own async task.
/// Handles message passing between Room and Player implementation.
///
/// - Room broadcasts Start/Update after every accepted event
/// - Actor skips stale views so the Player only decides on the newest one
/// - Actor calls Player::decide and sends the tap back to Room
/// - On Ended, Actor asks Player::again and forwards Again or Quit,
///   unless the room said it was the last round
pub struct Actor {
    id: usize,
    player: Box<dyn Player>,
    getter: UnboundedReceiver<Event>,
    sender: UnboundedSender<(usize, Input)>,
    backlog: VecDeque<Event>,
}

impl Actor {
    pub fn spawn(
        id: usize,
        player: Box<dyn Player>,
        sender: UnboundedSender<(usize, Input)>,
    ) -> UnboundedSender<Event> {
        let (tx, rx) = unbounded_channel();
        let actor = Self {
            id,
            player,
            sender,
            getter: rx,
            backlog: VecDeque::new(),
        };
        tokio::spawn(actor.run());
        tx
    }
    async fn run(mut self) {
        while let Some(event) = self.next().await {
            log::trace!("[actor P{}] received {}", self.id, event);
            self.player.notify(&event).await;
            match event {
                Event::Start { round, ref view } | Event::Update { round, ref view }
                    if view.status.is_playing() =>
                {
                    self.act(round, view).await
                }
                Event::Ended { last: true, .. } => break,
                Event::Ended { status, .. } => {
                    if !self.close(status).await {
                        break;
                    }
                }
                _ => continue,
            }
        }
        log::debug!("[actor P{}] leaving", self.id);
    }
    async fn act(&mut self, round: Round, view: &View) {
        if let Some(position) = self.player.decide(view).await {
            log::debug!("[actor P{}] taps {} in round {}", self.id, position, round);
            let _ = self.sender.send((self.id, Input::Select { round, position }));
        }
    }
    async fn close(&mut self, status: Status) -> bool {
        let again = self.player.again(status).await;
        let input = match again {
            true => Input::Again,
            false => Input::Quit,
        };
        self.sender.send((self.id, input)).is_ok() && again
    }
    /// Next event to handle. Consecutive views collapse into the latest.
    async fn next(&mut self) -> Option<Event> {
        if self.backlog.is_empty() {
            let event = self.getter.recv().await?;
            self.backlog.push_back(event);
        }
        while let Ok(event) = self.getter.try_recv() {
            self.backlog.push_back(event);
        }
        while self.backlog.len() > 1 && self.backlog.iter().take(2).all(Event::is_view) {
            self.backlog.pop_front();
        }
        self.backlog.pop_front()
    }
}
