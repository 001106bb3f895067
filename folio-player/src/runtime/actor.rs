use std::ops::ControlFlow;
use std::sync::Arc;

use folio_core::carousel::{Navigation, RenderSurface};
use folio_core::{CarouselController, CarouselSettings};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;
use tokio::task::JoinHandle;
use tracing::{debug, trace, warn};

use super::command::{CarouselCommand, CarouselStatus, TransitionNotifier};
use super::debounce::DebouncedSignal;
use super::scheduler::TokioScheduler;

type Controller<T, S> = CarouselController<T, S, TokioScheduler>;

/// Owns the controller; the only place its methods are called from.
struct CarouselActor<T, S> {
    controller: Controller<T, S>,
    commands: UnboundedReceiver<CarouselCommand>,
}

impl<T, S> CarouselActor<T, S>
where
    T: Send + 'static,
    S: RenderSurface + Send + 'static,
{
    async fn run(mut self) {
        while let Some(command) = self.commands.recv().await {
            if self.handle(command).is_break() {
                break;
            }
        }
        self.controller.teardown();
        debug!("carousel actor stopped");
    }

    fn handle(&mut self, command: CarouselCommand) -> ControlFlow<()> {
        match command {
            CarouselCommand::Next => {
                report("next", self.controller.next());
            }
            CarouselCommand::Previous => {
                report("previous", self.controller.previous());
            }
            CarouselCommand::JumpTo(index) => {
                report("jump", self.controller.jump_to(index));
            }
            CarouselCommand::PointerEnter => self.controller.pause(),
            CarouselCommand::PointerLeave => self.controller.resume(),
            CarouselCommand::Resized => {
                self.controller.on_resize();
            }
            CarouselCommand::TransitionFinished => {
                if let Some(position) = self.controller.transition_finished() {
                    trace!(
                        position,
                        index = self.controller.normalized_index(),
                        "transition settled"
                    );
                }
            }
            CarouselCommand::AutoAdvanceTick(timer) => {
                if self.controller.scheduler().is_live(timer) {
                    report("auto-advance", self.controller.auto_advance());
                } else {
                    trace!(timer = timer.0, "discarding tick from cancelled timer");
                }
            }
            CarouselCommand::Status(reply) => {
                let _ = reply.send(self.status());
            }
            CarouselCommand::Shutdown => return ControlFlow::Break(()),
        }
        ControlFlow::Continue(())
    }

    fn status(&self) -> CarouselStatus {
        let controller = &self.controller;
        CarouselStatus {
            position: controller.position(),
            normalized_index: controller.normalized_index(),
            direction: controller.direction(),
            phase: controller.phase(),
            auto_advancing: controller.is_auto_advancing(),
            live_timers: controller.scheduler().live_timers(),
        }
    }
}

fn report(action: &'static str, outcome: Navigation) {
    match outcome {
        Navigation::Started { from, to } => {
            debug!(action, from, to, "carousel moving")
        }
        Navigation::Dropped(reason) => {
            trace!(action, ?reason, "carousel input dropped")
        }
    }
}

#[derive(Debug)]
struct HandleInner {
    commands: UnboundedSender<CarouselCommand>,
    resize: DebouncedSignal,
}

impl Drop for HandleInner {
    fn drop(&mut self) {
        // Last handle gone: nobody can drive the carousel any more.
        let _ = self.commands.send(CarouselCommand::Shutdown);
    }
}

/// Cloneable front door to a running carousel. Every method is
/// fire-and-forget; commands sent after shutdown are dropped.
#[derive(Debug, Clone)]
pub struct CarouselHandle {
    inner: Arc<HandleInner>,
}

impl CarouselHandle {
    fn send(&self, command: CarouselCommand) {
        if let Err(err) = self.inner.commands.send(command) {
            trace!(command = ?err.0, "carousel stopped; command dropped");
        }
    }

    pub fn next(&self) {
        self.send(CarouselCommand::Next);
    }

    pub fn previous(&self) {
        self.send(CarouselCommand::Previous);
    }

    /// Activate indicator `index`.
    pub fn jump_to(&self, index: usize) {
        self.send(CarouselCommand::JumpTo(index));
    }

    pub fn pointer_enter(&self) {
        self.send(CarouselCommand::PointerEnter);
    }

    pub fn pointer_leave(&self) {
        self.send(CarouselCommand::PointerLeave);
    }

    /// Report a raw viewport resize. Bursts are collapsed and the carousel
    /// re-renders once the quiet period has passed.
    pub fn resized(&self) {
        self.inner.resize.trigger();
    }

    pub fn shutdown(&self) {
        self.send(CarouselCommand::Shutdown);
    }

    /// Ask the actor for its current state. `None` once it has stopped.
    pub async fn status(&self) -> Option<CarouselStatus> {
        let (reply, response) = oneshot::channel();
        self.send(CarouselCommand::Status(reply));
        response.await.ok()
    }

    pub fn is_closed(&self) -> bool {
        self.inner.commands.is_closed()
    }
}

/// A spawned carousel: its handle plus the actor task.
#[derive(Debug)]
pub struct CarouselTask {
    handle: CarouselHandle,
    join: JoinHandle<()>,
}

impl CarouselTask {
    pub fn handle(&self) -> &CarouselHandle {
        &self.handle
    }

    /// Stop the carousel and wait for the actor to release its timer.
    pub async fn shutdown(self) {
        self.handle.shutdown();
        drop(self.handle);
        if let Err(err) = self.join.await {
            warn!(%err, "carousel task ended abnormally");
        }
    }
}

/// Start a carousel over `items` on the current tokio runtime.
///
/// `make_surface` receives the notifier the surface must call whenever an
/// animated translation completes. Returns `None` for an empty list, in
/// which case nothing is spawned and the host should leave the carousel
/// markup inert.
pub fn spawn_carousel<T, S, F>(
    items: Vec<T>,
    settings: CarouselSettings,
    make_surface: F,
) -> Option<CarouselTask>
where
    T: Clone + Send + 'static,
    S: RenderSurface + Send + 'static,
    F: FnOnce(TransitionNotifier) -> S,
{
    let (commands, receiver) = mpsc::unbounded_channel();
    let surface = make_surface(TransitionNotifier::new(commands.clone()));
    let scheduler = TokioScheduler::new(commands.clone());

    let controller =
        match CarouselController::new(items, surface, scheduler, settings) {
            Ok(controller) => controller,
            Err(err) => {
                debug!(%err, "carousel not started");
                return None;
            }
        };

    let resize_commands = commands.clone();
    let resize = DebouncedSignal::spawn(settings.resize_quiet_period(), move || {
        let _ = resize_commands.send(CarouselCommand::Resized);
    });

    let actor = CarouselActor {
        controller,
        commands: receiver,
    };
    let join = tokio::spawn(actor.run());

    Some(CarouselTask {
        handle: CarouselHandle {
            inner: Arc::new(HandleInner { commands, resize }),
        },
        join,
    })
}
