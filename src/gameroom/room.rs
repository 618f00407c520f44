use super::*;
use crate::*;
use crate::game::*;
use rand::rngs::SmallRng;
use tokio::sync::mpsc::*;

/// Central coordinator for live rounds.
/// Owns the single Session of the current round, drives its countdown,
/// forwards player taps into it, and broadcasts the resulting views.
///
/// Room runs one loop multiplexing three sources:
/// - Ticker: one pulse per second while the session is playing
/// - Notice: delayed announcement after a terminal transition
/// - Inputs: taps, play-again and quit requests from Actors
///
/// A new round always means a brand new Session; nothing is reset in place.
#[derive(Debug)]
pub struct Room {
    config: Config,
    timer: TimerConfig,
    rng: SmallRng,
    round: Round,
    session: Session,
    ticker: Option<Ticker>,
    notice: Option<Notice>,
    notices: Channel<(Round, Status)>,
    channel: Channel<(usize, Input)>,
    players: Vec<UnboundedSender<Event>>,
    results: Vec<Status>,
    limit: Option<usize>,
}

/// what woke the loop up
enum Wake {
    Tick,
    Notice(Round, Status),
    Input(usize, Input),
    Gone,
}

impl Room {
    pub fn new(config: Config, timer: TimerConfig, mut rng: SmallRng) -> Result<Self, Error> {
        let session = Session::create(config, &mut rng)?;
        Ok(Self {
            config,
            timer,
            rng,
            session,
            round: 1,
            ticker: None,
            notice: None,
            notices: Channel::default(),
            channel: Channel::default(),
            players: Vec::new(),
            results: Vec::new(),
            limit: None,
        })
    }

    /// stop after this many rounds have been announced
    pub fn limit(mut self, rounds: usize) -> Self {
        self.limit = Some(rounds);
        self
    }

    pub fn sit<P>(&mut self, player: P)
    where
        P: Player + 'static,
    {
        match self.channel.sender() {
            Some(sender) => self.players.push(Actor::spawn(
                self.players.len(),
                Box::new(player),
                sender,
            )),
            None => log::error!("[room {}] cannot seat a player mid-run", self.round),
        }
    }

    /// Play until a player quits, every player leaves, or the round limit is hit.
    /// Returns the outcome of each finished round in order.
    pub async fn run(mut self) -> anyhow::Result<Vec<Status>> {
        anyhow::ensure!(!self.players.is_empty(), "no players seated");
        anyhow::ensure!(self.limit != Some(0), "round limit must be positive");
        self.channel.seal();
        log::info!("[room {}] dealing {}", self.round, self.config);
        self.begin();
        loop {
            match self.wake().await {
                Wake::Tick => self.on_tick(),
                Wake::Notice(round, status) => {
                    if self.on_notice(round, status) {
                        break;
                    }
                }
                Wake::Input(i, Input::Select { round, position }) => {
                    self.on_select(i, round, position)
                }
                Wake::Input(i, Input::Again) => self.on_again(i),
                Wake::Input(i, Input::Quit) => {
                    log::info!("[room {}] P{} quit", self.round, i);
                    break;
                }
                Wake::Gone => {
                    log::warn!("[room {}] all players gone", self.round);
                    break;
                }
            }
        }
        Ok(self.results)
    }
}

impl Room {
    async fn wake(&mut self) -> Wake {
        tokio::select! {
            _ = pulse(&mut self.ticker) => Wake::Tick,
            Some((round, status)) = self.notices.rx().recv() => Wake::Notice(round, status),
            input = self.channel.rx().recv() => match input {
                Some((i, input)) => Wake::Input(i, input),
                None => Wake::Gone,
            },
        }
    }

    fn begin(&mut self) {
        self.ticker = Some(Ticker::start(self.timer.tick));
        self.broadcast(Event::Start {
            round: self.round,
            view: self.session.view(),
        });
    }

    fn on_tick(&mut self) {
        let ended = self.session.tick();
        log::debug!("[room {}] tick {}s left", self.round, self.session.remaining());
        self.update();
        if let Some(status) = ended {
            self.conclude(status);
        }
    }

    fn on_select(&mut self, i: usize, round: Round, position: Position) {
        if round != self.round {
            log::debug!("[room {}] P{} tapped in stale round {}", self.round, i, round);
            return;
        }
        let before = self.session.selected().len();
        match self.session.select(position) {
            Err(e) => log::error!("[room {}] P{} {}", self.round, i, e),
            Ok(ended) => {
                if self.session.selected().len() > before {
                    self.update();
                }
                if let Some(status) = ended {
                    self.conclude(status);
                }
            }
        }
    }

    /// returns true when the room is done
    fn on_notice(&mut self, round: Round, status: Status) -> bool {
        if round != self.round {
            log::debug!("[room {}] ignoring notice from round {}", self.round, round);
            return false;
        }
        self.notice = None;
        let last = self.limit.is_some_and(|limit| self.results.len() >= limit);
        self.broadcast(Event::Ended {
            round,
            status,
            last,
        });
        last
    }

    fn on_again(&mut self, i: usize) {
        if self.session.status().is_playing() {
            log::debug!("[room {}] P{} asked to replay mid-round", self.round, i);
            return;
        }
        match Session::create(self.config, &mut self.rng) {
            Err(e) => log::error!("[room {}] cannot deal: {}", self.round, e),
            Ok(session) => {
                self.notice = None;
                self.session = session;
                self.round += 1;
                log::info!("[room {}] dealing {}", self.round, self.config);
                self.begin();
            }
        }
    }

    /// terminal transition: stop the countdown and schedule the announcement
    fn conclude(&mut self, status: Status) {
        log::info!(
            "[room {}] {} with {}/{} and {}s left",
            self.round,
            status,
            self.session.sum(),
            self.session.target(),
            self.session.remaining()
        );
        self.ticker = None;
        self.results.push(status);
        self.notice = self
            .notices
            .sender()
            .map(|tx| Notice::schedule(self.timer.notice, (self.round, status), tx));
    }
}

impl Room {
    fn update(&self) {
        self.broadcast(Event::Update {
            round: self.round,
            view: self.session.view(),
        });
    }
    fn broadcast(&self, event: Event) {
        self.players
            .iter()
            .map(|inbox| inbox.send(event.clone()))
            .collect::<Vec<Result<_, _>>>()
            .into_iter()
            .enumerate()
            .filter_map(|(i, res)| res.err().map(|e| (i, e)))
            .for_each(|(i, e)| log::warn!("failed broadcast to P{}: {:?}", i, e));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::sync::Arc;
    use std::sync::Mutex;
    use std::sync::atomic::AtomicBool;
    use std::sync::atomic::Ordering;
    use std::time::Duration;
    use tokio::time::Instant;

    fn room(seed: u64) -> Room {
        Room::new(
            Config::default(),
            TimerConfig::default(),
            SmallRng::seed_from_u64(seed),
        )
        .unwrap()
    }

    /// never taps, leaves after the first announcement
    struct Idle;

    #[async_trait::async_trait]
    impl Player for Idle {
        async fn decide(&mut self, _: &View) -> Option<Position> {
            None
        }
        async fn notify(&mut self, _: &Event) {}
        async fn again(&mut self, _: Status) -> bool {
            false
        }
    }

    /// taps one position that does not exist, then waits
    struct Clumsy(bool);

    #[async_trait::async_trait]
    impl Player for Clumsy {
        async fn decide(&mut self, view: &View) -> Option<Position> {
            match std::mem::replace(&mut self.0, true) {
                false => Some(view.numbers.len()),
                true => None,
            }
        }
        async fn notify(&mut self, _: &Event) {}
        async fn again(&mut self, _: Status) -> bool {
            false
        }
    }

    /// idle player that remembers when each event arrived
    struct Recorder(Arc<Mutex<Vec<(Instant, Event)>>>);

    #[async_trait::async_trait]
    impl Player for Recorder {
        async fn decide(&mut self, _: &View) -> Option<Position> {
            None
        }
        async fn notify(&mut self, event: &Event) {
            self.0.lock().unwrap().push((Instant::now(), event.clone()));
        }
        async fn again(&mut self, _: Status) -> bool {
            false
        }
    }

    /// crashes when asked to play again
    struct Crasher;

    #[async_trait::async_trait]
    impl Player for Crasher {
        async fn decide(&mut self, _: &View) -> Option<Position> {
            None
        }
        async fn notify(&mut self, _: &Event) {}
        async fn again(&mut self, _: Status) -> bool {
            panic!("player crashed between rounds")
        }
    }

    /// solver that remembers whether it was ever asked to replay
    struct Asked(Solver, Arc<AtomicBool>);

    #[async_trait::async_trait]
    impl Player for Asked {
        async fn decide(&mut self, view: &View) -> Option<Position> {
            self.0.decide(view).await
        }
        async fn notify(&mut self, event: &Event) {
            self.0.notify(event).await
        }
        async fn again(&mut self, status: Status) -> bool {
            self.1.store(true, Ordering::SeqCst);
            self.0.again(status).await
        }
    }

    #[test]
    fn rejects_invalid_config() {
        let room = Room::new(
            Config::new(1, 10),
            TimerConfig::default(),
            SmallRng::seed_from_u64(0),
        );
        assert!(matches!(room, Err(Error::InvalidConfiguration(_))));
    }

    #[tokio::test(start_paused = true)]
    async fn empty_room_refuses_to_run() {
        assert!(room(0).run().await.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn solver_wins_a_round() {
        let mut room = room(1).limit(1);
        room.sit(Solver::default());
        assert_eq!(room.run().await.unwrap(), vec![Status::Won]);
    }

    #[tokio::test(start_paused = true)]
    async fn idle_player_runs_out_of_time() {
        let start = Instant::now();
        let mut room = room(2);
        room.sit(Idle);
        assert_eq!(room.run().await.unwrap(), vec![Status::Lost]);
        assert!(start.elapsed() >= Duration::from_millis(10_500));
        assert!(start.elapsed() < Duration::from_secs(11));
    }

    #[tokio::test(start_paused = true)]
    async fn replays_with_fresh_sessions() {
        let mut room = room(3);
        room.sit(Solver::default().rounds(3));
        let results = room.run().await.unwrap();
        assert_eq!(results, vec![Status::Won; 3]);
    }

    #[tokio::test(start_paused = true)]
    async fn fish_leaves_after_its_rounds() {
        let mut room = room(6);
        room.sit(Fish::seeded(1).rounds(5));
        let results = tokio::time::timeout(Duration::from_secs(600), room.run())
            .await
            .expect("fish quits on its own")
            .unwrap();
        assert_eq!(results.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn stops_when_last_player_dies() {
        let mut room = room(7);
        room.sit(Crasher);
        let results = tokio::time::timeout(Duration::from_secs(600), room.run())
            .await
            .expect("room notices its only player left")
            .unwrap();
        assert_eq!(results, vec![Status::Lost]);
    }

    #[tokio::test(start_paused = true)]
    async fn last_round_is_not_offered_again() {
        let asked = Arc::new(AtomicBool::new(false));
        let mut room = room(8).limit(1);
        room.sit(Asked(Solver::default(), asked.clone()));
        assert_eq!(room.run().await.unwrap(), vec![Status::Won]);
        tokio::time::sleep(Duration::from_secs(1)).await;
        assert!(!asked.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn earlier_rounds_are_offered_again() {
        let asked = Arc::new(AtomicBool::new(false));
        let mut room = room(9).limit(2);
        room.sit(Asked(Solver::default(), asked.clone()));
        assert_eq!(room.run().await.unwrap(), vec![Status::Won; 2]);
        assert!(asked.load(Ordering::SeqCst));
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_range_tap_is_ignored() {
        let mut room = room(4);
        room.sit(Clumsy(false));
        assert_eq!(room.run().await.unwrap(), vec![Status::Lost]);
    }

    #[tokio::test(start_paused = true)]
    async fn countdown_and_single_announcement() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut room = room(5);
        room.sit(Recorder(log.clone()));
        room.run().await.unwrap();
        let log = log.lock().unwrap().clone();
        let views = log
            .iter()
            .filter_map(|(at, e)| e.view().map(|v| (*at, v.clone())))
            .collect::<Vec<_>>();
        let ended = log
            .iter()
            .filter(|(_, e)| matches!(e, Event::Ended { .. }))
            .collect::<Vec<_>>();
        assert_eq!(views.len(), 11);
        assert!(views.windows(2).all(|w| w[0].1.remaining >= w[1].1.remaining));
        assert!(views[..10].iter().all(|(_, v)| v.status == Status::Playing));
        assert_eq!(views[10].1.remaining, 0);
        assert_eq!(views[10].1.status, Status::Lost);
        assert!(views[10].1.numbers.iter().all(|n| n.disabled));
        assert_eq!(ended.len(), 1);
        assert_eq!(
            ended[0].1,
            Event::Ended {
                round: 1,
                status: Status::Lost,
                last: false,
            }
        );
        let delay = ended[0].0 - views[10].0;
        assert!(delay >= Duration::from_millis(500));
        assert!(delay < Duration::from_secs(1));
    }
}
