use std::time::Duration;

use tokio::sync::{mpsc, oneshot, watch};
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use super::{Carousel, CarouselError, CarouselState};

#[derive(Debug, Clone, Copy)]
enum Command {
    Next,
    Previous,
    GoTo(usize),
    Gesture { offset: f64, velocity: f64 },
}

type Reply = oneshot::Sender<Result<CarouselState, CarouselError>>;

/// Handle to a running carousel. The driver task owns the `Carousel`; the periodic
/// timer and manual navigation are both serialised through its command loop.
/// The driver stops once every handle is dropped.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    tx: mpsc::Sender<(Command, Reply)>,
    state_rx: watch::Receiver<CarouselState>,
}

impl CarouselHandle {
    pub fn spawn(carousel: Carousel, period: Duration) -> Self {
        let (tx, rx) = mpsc::channel(32);
        let (state_tx, state_rx) = watch::channel(carousel.state());
        tokio::spawn(run(carousel, period, rx, state_tx));
        Self { tx, state_rx }
    }

    pub fn state(&self) -> CarouselState {
        *self.state_rx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<CarouselState> {
        self.state_rx.clone()
    }

    pub async fn next(&self) -> Result<CarouselState, CarouselError> {
        self.send(Command::Next).await
    }

    pub async fn previous(&self) -> Result<CarouselState, CarouselError> {
        self.send(Command::Previous).await
    }

    pub async fn go_to(&self, index: usize) -> Result<CarouselState, CarouselError> {
        self.send(Command::GoTo(index)).await
    }

    pub async fn gesture(&self, offset: f64, velocity: f64) -> Result<CarouselState, CarouselError> {
        self.send(Command::Gesture { offset, velocity }).await
    }

    async fn send(&self, command: Command) -> Result<CarouselState, CarouselError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send((command, reply_tx))
            .await
            .map_err(|_| CarouselError::Stopped)?;
        reply_rx.await.map_err(|_| CarouselError::Stopped)?
    }
}

async fn run(
    mut carousel: Carousel,
    period: Duration,
    mut rx: mpsc::Receiver<(Command, Reply)>,
    state_tx: watch::Sender<CarouselState>,
) {
    let mut ticker = interval_at(Instant::now() + period, period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                carousel.tick();
                tracing::debug!(index = carousel.index(), "carousel auto-advanced");
                state_tx.send_replace(carousel.state());
            }
            msg = rx.recv() => {
                let Some((command, reply)) = msg else {
                    break;
                };
                let result = apply(&mut carousel, command);
                if let Ok(true) = result {
                    // manual navigation restarts the period so it can't double-skip
                    ticker.reset();
                    state_tx.send_replace(carousel.state());
                }
                let _ = reply.send(result.map(|_| carousel.state()));
            }
        }
    }

    tracing::debug!("carousel driver stopped");
}

/// Returns whether the slide changed.
fn apply(carousel: &mut Carousel, command: Command) -> Result<bool, CarouselError> {
    match command {
        Command::Next => carousel.next(),
        Command::Previous => carousel.previous(),
        Command::GoTo(index) => carousel.go_to(index)?,
        Command::Gesture { offset, velocity } => {
            return Ok(carousel.gesture(offset, velocity).is_some());
        }
    }
    Ok(true)
}
