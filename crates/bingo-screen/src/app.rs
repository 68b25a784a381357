//! The application loop: [`Model`], [`Driver`], [`Effect`], [`App`].

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::messages::Msg;
use crate::screen::{Frame, Screen};

// ---------------------------------------------------------------------------
// Context (cancellation token)
// ---------------------------------------------------------------------------

/// A cooperative-cancellation token backed by an [`AtomicBool`].
#[derive(Clone, Debug)]
pub struct Context {
    done: Arc<AtomicBool>,
}

impl Context {
    pub fn new() -> Self {
        Self {
            done: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Whether cancellation has been requested.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.done.load(Ordering::Relaxed)
    }

    /// Request cancellation.
    #[inline]
    pub fn cancel(&self) {
        self.done.store(true, Ordering::Relaxed);
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Effect
// ---------------------------------------------------------------------------

/// A side-effect returned by [`Model::update`].
pub enum Effect {
    /// A one-shot command run off the loop thread; a returned message is
    /// fed back into the application.
    Cmd(Box<dyn FnOnce() -> Option<Msg> + Send>),
    /// Multiple effects applied in order.
    Batch(Vec<Effect>),
    /// Ask the back-end to enter or leave fullscreen.
    Fullscreen(bool),
    /// Stop the application loop.
    End,
}

impl std::fmt::Debug for Effect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Cmd(_) => f.write_str("Effect::Cmd(..)"),
            Self::Batch(v) => f.debug_tuple("Effect::Batch").field(&v.len()).finish(),
            Self::Fullscreen(on) => f.debug_tuple("Effect::Fullscreen").field(on).finish(),
            Self::End => f.write_str("Effect::End"),
        }
    }
}

/// Convenience constructor for an [`Effect::Cmd`].
pub fn cmd<F>(f: F) -> Effect
where
    F: FnOnce() -> Option<Msg> + Send + 'static,
{
    Effect::Cmd(Box::new(f))
}

/// A command that sleeps for `delay` and then delivers
/// [`Msg::Tick`] with the given sequence number.
pub fn tick_after(delay: Duration, seq: u64) -> Effect {
    cmd(move || {
        thread::sleep(delay);
        Some(Msg::Tick { seq })
    })
}

// ---------------------------------------------------------------------------
// Model / Driver
// ---------------------------------------------------------------------------

/// The application model.
pub trait Model {
    /// Process a message, optionally returning a side-effect.
    fn update(&mut self, msg: Msg) -> Option<Effect>;

    /// Render the current state into `screen`. Called after every batch
    /// of messages; implementations repaint the whole screen.
    fn draw(&self, screen: &mut Screen);
}

/// A rendering/input back-end.
pub trait Driver {
    /// Initialise the back-end.
    fn init(&mut self) -> Result<(), Box<dyn std::error::Error>>;

    /// Poll for input, sending any messages through `tx`. Should return
    /// promptly (single poll round), and honour `ctx.is_done()`.
    fn poll(&mut self, ctx: &Context, tx: &Sender<Msg>) -> Result<(), Box<dyn std::error::Error>>;

    /// Repaint the cells of a computed frame.
    fn flush(&mut self, frame: Frame) -> Result<(), Box<dyn std::error::Error>>;

    /// Window fullscreen toggle. Back-ends without a window ignore it.
    fn set_fullscreen(&mut self, _on: bool) {}

    /// Clean up / restore the terminal.
    fn close(&mut self);
}

// ---------------------------------------------------------------------------
// AppConfig / App
// ---------------------------------------------------------------------------

/// Configuration for creating an [`App`].
pub struct AppConfig<M: Model, D: Driver> {
    pub model: M,
    pub driver: D,
    pub width: i32,
    pub height: i32,
}

/// The main application runner: poll → update → draw → diff → flush.
pub struct App<M: Model, D: Driver> {
    model: M,
    driver: D,
    width: i32,
    height: i32,
}

impl<M: Model, D: Driver> App<M, D> {
    pub fn new(config: AppConfig<M, D>) -> Self {
        Self {
            model: config.model,
            driver: config.driver,
            width: config.width,
            height: config.height,
        }
    }

    /// Run the loop until the model returns [`Effect::End`].
    ///
    /// One user input is processed to completion (update, then redraw)
    /// before the next is read, so state transitions never interleave.
    /// Commands run on helper threads but only ever re-enter through
    /// the message channel.
    pub fn run(&mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.driver.init()?;

        let ctx = Context::new();
        let (tx, rx): (Sender<Msg>, Receiver<Msg>) = mpsc::channel();

        // Seed with Init.
        tx.send(Msg::Init).ok();

        let mut prev = Screen::new(self.width, self.height);
        let mut curr = Screen::new(self.width, self.height);

        while !ctx.is_done() {
            if let Err(e) = self.pump(&rx, &ctx, &tx, &mut prev, &mut curr) {
                ctx.cancel();
                self.driver.close();
                return Err(e);
            }

            if ctx.is_done() {
                break;
            }

            if let Err(e) = self.driver.poll(&ctx, &tx) {
                ctx.cancel();
                self.driver.close();
                return Err(e);
            }
        }

        self.driver.close();
        Ok(())
    }

    /// Drain queued messages, update the model, then draw/diff/flush.
    fn pump(
        &mut self,
        rx: &Receiver<Msg>,
        ctx: &Context,
        tx: &Sender<Msg>,
        prev: &mut Screen,
        curr: &mut Screen,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let mut dirty = false;

        while let Ok(msg) = rx.try_recv() {
            dirty = true;
            if let Some(effect) = self.model.update(msg) {
                if self.apply(effect, ctx, tx) {
                    return Ok(());
                }
            }
        }

        if dirty {
            self.model.draw(curr);
            let frame = curr.diff(prev);
            if !frame.cells.is_empty() {
                self.driver.flush(frame)?;
            }
            prev.copy_from(curr);
        }

        Ok(())
    }

    /// Apply an effect. Returns `true` when the app should stop.
    fn apply(&mut self, effect: Effect, ctx: &Context, tx: &Sender<Msg>) -> bool {
        match effect {
            Effect::End => {
                ctx.cancel();
                true
            }
            Effect::Fullscreen(on) => {
                self.driver.set_fullscreen(on);
                false
            }
            Effect::Cmd(f) => {
                let tx = tx.clone();
                thread::spawn(move || {
                    if let Some(msg) = f() {
                        tx.send(msg).ok();
                    }
                });
                false
            }
            Effect::Batch(effects) => {
                for e in effects {
                    if self.apply(e, ctx, tx) {
                        return true;
                    }
                }
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;
    use crate::messages::Key;
    use crate::screen::Frame;
    use std::time::Duration;

    #[test]
    fn tick_after_produces_a_tick() {
        let effect = tick_after(Duration::ZERO, 7);
        match effect {
            Effect::Cmd(f) => assert_eq!(f(), Some(Msg::Tick { seq: 7 })),
            other => panic!("expected Cmd, got {other:?}"),
        }
    }

    /// Model that counts key presses and ends on Quit.
    struct CountModel {
        keys: usize,
    }

    impl Model for CountModel {
        fn update(&mut self, msg: Msg) -> Option<Effect> {
            match msg {
                Msg::KeyDown(_) => {
                    self.keys += 1;
                    None
                }
                Msg::Quit => Some(Effect::End),
                _ => None,
            }
        }

        fn draw(&self, screen: &mut Screen) {
            screen.fill(Cell::default());
            let marker = char::from_digit((self.keys % 10) as u32, 10).unwrap_or('?');
            screen.set(
                crate::geom::Point::new(0, 0),
                Cell::default().with_char(marker),
            );
        }
    }

    /// Driver that feeds a fixed script of messages, one per poll.
    struct ScriptDriver {
        script: Vec<Msg>,
        flushed: usize,
        closed: bool,
    }

    impl Driver for ScriptDriver {
        fn init(&mut self) -> Result<(), Box<dyn std::error::Error>> {
            Ok(())
        }

        fn poll(
            &mut self,
            _ctx: &Context,
            tx: &Sender<Msg>,
        ) -> Result<(), Box<dyn std::error::Error>> {
            if self.script.is_empty() {
                tx.send(Msg::Quit).ok();
            } else {
                tx.send(self.script.remove(0)).ok();
            }
            Ok(())
        }

        fn flush(&mut self, _frame: Frame) -> Result<(), Box<dyn std::error::Error>> {
            self.flushed += 1;
            Ok(())
        }

        fn close(&mut self) {
            self.closed = true;
        }
    }

    #[test]
    fn app_runs_script_to_completion() {
        let driver = ScriptDriver {
            script: vec![
                Msg::KeyDown(Key::Char('a')),
                Msg::KeyDown(Key::Char('b')),
                Msg::KeyDown(Key::Char('c')),
            ],
            flushed: 0,
            closed: false,
        };
        let mut app = App::new(AppConfig {
            model: CountModel { keys: 0 },
            driver,
            width: 4,
            height: 2,
        });
        app.run().unwrap();
        assert_eq!(app.model.keys, 3);
        assert!(app.driver.closed);
        // At least the initial draw and the key repaints reached the
        // driver.
        assert!(app.driver.flushed >= 2);
    }
}
