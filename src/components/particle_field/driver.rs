//! `requestAnimationFrame` loop with an explicit stop handle.
//!
//! The driver owns the frame callback and the window/document listeners that
//! feed the simulation. Stopping cancels the pending frame and detaches every
//! listener; dropping the driver stops it.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::info;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, MouseEvent, Window};

use super::render;
use super::state::ParticleFieldState;

/// Lifecycle of an [`AnimationDriver`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverPhase {
	/// Constructed, no frame scheduled yet.
	#[default]
	Idle,
	/// A frame is scheduled after every frame.
	Running,
	/// Torn down; may be started again.
	Stopped,
}

impl DriverPhase {
	pub fn can_start(self) -> bool {
		matches!(self, DriverPhase::Idle | DriverPhase::Stopped)
	}

	pub fn can_stop(self) -> bool {
		self == DriverPhase::Running
	}
}

/// An attached DOM listener; `detach` removes it and frees its callback.
struct Listener {
	detach: Box<dyn FnOnce()>,
}

/// Drives a [`ParticleFieldState`] once per display refresh.
#[derive(Default)]
pub struct AnimationDriver {
	phase: Rc<Cell<DriverPhase>>,
	frame_id: Rc<Cell<Option<i32>>>,
	frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
	listeners: Vec<Listener>,
}

impl AnimationDriver {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn phase(&self) -> DriverPhase {
		self.phase.get()
	}

	/// Installs listeners and schedules the first frame.
	///
	/// Does nothing if the driver is already running.
	pub fn start(
		&mut self,
		state: Rc<RefCell<ParticleFieldState>>,
		canvas: HtmlCanvasElement,
		ctx: CanvasRenderingContext2d,
	) -> Result<(), JsValue> {
		if !self.phase().can_start() {
			return Ok(());
		}
		if let Err(err) = self.attach(state, canvas, ctx) {
			self.release();
			return Err(err);
		}
		info!("particles: animation started");
		Ok(())
	}

	fn attach(
		&mut self,
		state: Rc<RefCell<ParticleFieldState>>,
		canvas: HtmlCanvasElement,
		ctx: CanvasRenderingContext2d,
	) -> Result<(), JsValue> {
		let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
		let document = window
			.document()
			.ok_or_else(|| JsValue::from_str("no document"))?;

		let state_resize = state.clone();
		self.listen(window.as_ref(), "resize", move |_| {
			let Some(win) = web_sys::window() else {
				return;
			};
			let (w, h) = viewport_size(&win);
			canvas.set_width(w as u32);
			canvas.set_height(h as u32);
			state_resize.borrow_mut().resize(w, h);
		})?;

		let state_pointer = state.clone();
		self.listen(document.as_ref(), "mousemove", move |ev| {
			if let Some(ev) = ev.dyn_ref::<MouseEvent>() {
				state_pointer
					.borrow_mut()
					.set_pointer(ev.client_x() as f64, ev.client_y() as f64);
			}
		})?;

		let (phase, frame_id, frame_inner) =
			(self.phase.clone(), self.frame_id.clone(), self.frame.clone());
		*self.frame.borrow_mut() = Some(Closure::new(move || {
			if phase.get() != DriverPhase::Running {
				return;
			}
			{
				let mut s = state.borrow_mut();
				s.tick();
				render::draw(&s, &ctx);
			}
			if let Some(ref cb) = *frame_inner.borrow() {
				frame_id.set(request_frame(cb));
			}
		}));

		self.phase.set(DriverPhase::Running);
		if let Some(ref cb) = *self.frame.borrow() {
			self.frame_id.set(request_frame(cb));
		}
		Ok(())
	}

	/// Cancels the pending frame and detaches all listeners.
	///
	/// Anything left attached by a failed [`start`](Self::start) is released
	/// too, whatever the phase.
	pub fn stop(&mut self) {
		let running = self.phase().can_stop();
		if running {
			self.phase.set(DriverPhase::Stopped);
		}
		self.release();
		if running {
			info!("particles: animation stopped");
		}
	}

	fn release(&mut self) {
		if let Some(id) = self.frame_id.take() {
			if let Some(window) = web_sys::window() {
				let _ = window.cancel_animation_frame(id);
			}
		}
		for listener in self.listeners.drain(..) {
			(listener.detach)();
		}
		// The frame closure holds a handle to its own slot; release it.
		self.frame.borrow_mut().take();
	}

	fn listen(
		&mut self,
		target: &EventTarget,
		event: &'static str,
		handler: impl FnMut(Event) + 'static,
	) -> Result<(), JsValue> {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
		let target = target.clone();
		self.listeners.push(Listener {
			detach: Box::new(move || {
				let _ = target.remove_event_listener_with_callback(
					event,
					callback.as_ref().unchecked_ref(),
				);
			}),
		});
		Ok(())
	}
}

impl Drop for AnimationDriver {
	fn drop(&mut self) {
		self.stop();
	}
}

fn request_frame(cb: &Closure<dyn FnMut()>) -> Option<i32> {
	web_sys::window()?
		.request_animation_frame(cb.as_ref().unchecked_ref())
		.ok()
}

/// Inner window size, or zero when the browser refuses to report it.
pub fn viewport_size(window: &Window) -> (f64, f64) {
	(
		window
			.inner_width()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
		window
			.inner_height()
			.ok()
			.and_then(|v| v.as_f64())
			.unwrap_or(0.0),
	)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_phase_transitions() {
		assert!(DriverPhase::Idle.can_start());
		assert!(!DriverPhase::Idle.can_stop());
		assert!(!DriverPhase::Running.can_start());
		assert!(DriverPhase::Running.can_stop());
		assert!(DriverPhase::Stopped.can_start());
		assert!(!DriverPhase::Stopped.can_stop());
	}

	#[test]
	fn test_new_driver_is_idle_and_stop_is_noop() {
		let mut driver = AnimationDriver::new();
		assert_eq!(driver.phase(), DriverPhase::Idle);
		driver.stop();
		assert_eq!(driver.phase(), DriverPhase::Idle);
	}

	#[test]
	fn test_stop_detaches_listeners_left_by_failed_start() {
		let detached = Rc::new(Cell::new(0));
		let mut driver = AnimationDriver::new();
		for _ in 0..2 {
			let detached = detached.clone();
			driver.listeners.push(Listener {
				detach: Box::new(move || detached.set(detached.get() + 1)),
			});
		}

		driver.stop();
		assert_eq!(detached.get(), 2);
		assert!(driver.listeners.is_empty());
		assert_eq!(driver.phase(), DriverPhase::Idle);

		drop(driver);
		assert_eq!(detached.get(), 2);
	}

	#[test]
	fn test_drop_detaches_listeners() {
		let detached = Rc::new(Cell::new(false));
		let mut driver = AnimationDriver::new();
		let flag = detached.clone();
		driver.listeners.push(Listener {
			detach: Box::new(move || flag.set(true)),
		});

		drop(driver);
		assert!(detached.get());
	}
}
