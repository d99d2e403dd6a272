//! Terminal event loop.

use std::collections::VecDeque;
use std::io::{self, stdout};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use foodhub_core::FilterStore;
use log::warn;
use ratatui::crossterm::event::{
	self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::crossterm::execute;

use crate::app::{App, Outcome};
use crate::builder::Storefront;

const FRAME: Duration = Duration::from_millis(16);
const POLL: Duration = Duration::from_millis(50);

/// Run a default storefront persisting through `store`.
pub fn run(store: Box<dyn FilterStore>) -> Result<Outcome> {
	Storefront::new(store).run()
}

/// Background reader that forwards terminal events over a channel.
struct EventPump {
	events: mpsc::Receiver<Event>,
	running: Arc<AtomicBool>,
	reader: thread::JoinHandle<Result<()>>,
}

impl EventPump {
	fn spawn() -> Self {
		let (tx, events) = mpsc::channel();
		let running = Arc::new(AtomicBool::new(true));
		let flag = Arc::clone(&running);
		let reader = thread::spawn(move || -> Result<()> {
			while flag.load(Ordering::Relaxed) {
				if event::poll(POLL)? && tx.send(event::read()?).is_err() {
					break;
				}
			}
			Ok(())
		});
		Self {
			events,
			running,
			reader,
		}
	}

	/// Move everything received so far into `pending`.
	fn drain(&self, pending: &mut VecDeque<Event>) -> Result<()> {
		loop {
			match self.events.try_recv() {
				Ok(event) => pending.push_back(event),
				Err(mpsc::TryRecvError::Empty) => return Ok(()),
				Err(mpsc::TryRecvError::Disconnected) => {
					return Err(anyhow!("input event channel disconnected"));
				}
			}
		}
	}

	fn stop(self) -> Result<()> {
		self.running.store(false, Ordering::Relaxed);
		match self.reader.join() {
			Ok(result) => result,
			Err(panic) => std::panic::resume_unwind(panic),
		}
	}
}

impl App {
	/// Pump the terminal event loop until the user quits.
	pub fn run(&mut self) -> Result<Outcome> {
		let mut terminal = ratatui::init();
		if let Err(err) = terminal
			.clear()
			.and_then(|()| execute!(stdout(), EnableMouseCapture))
		{
			if let Err(restore) = teardown() {
				warn!("terminal restore failed: {restore}");
			}
			return Err(err.into());
		}

		let pump = EventPump::spawn();
		let mut pending = VecDeque::new();

		let result: Result<Outcome> = loop {
			if let Err(err) = pump.drain(&mut pending) {
				break Err(err);
			}

			let now = Instant::now();
			let outcome = self.dispatch(&mut pending, now);
			if let Some(outcome) = outcome {
				break Ok(outcome);
			}

			// tui-logger 0.14 moves buffered events on its own background thread
			// (spawned by `init_logger`); there is no free `move_events` to call.
			let now = Instant::now();
			self.tick(now);
			if let Err(err) = terminal.draw(|frame| self.draw(frame, now)) {
				break Err(err.into());
			}

			thread::sleep(FRAME);
		};

		let restored = teardown();
		let stopped = pump.stop();
		finish(result, restored, stopped)
	}

	/// Feed queued events to the handlers, stopping at the first that quits.
	fn dispatch(&mut self, pending: &mut VecDeque<Event>, now: Instant) -> Option<Outcome> {
		while let Some(event) = pending.pop_front() {
			match event {
				Event::Key(key) if key.kind == KeyEventKind::Press => {
					if let Some(outcome) = self.handle_key(key, now) {
						return Some(outcome);
					}
				}
				Event::Mouse(mouse) => self.handle_mouse(mouse, now),
				Event::Resize(_, rows) => self.resize(rows),
				_ => {}
			}
		}
		None
	}
}

fn teardown() -> io::Result<()> {
	ratatui::restore();
	execute!(stdout(), DisableMouseCapture)
}

/// The loop's result, unless it succeeded and shutting down did not.
fn finish<T>(result: Result<T>, restored: io::Result<()>, stopped: Result<()>) -> Result<T> {
	let value = result?;
	restored?;
	stopped?;
	Ok(value)
}
