use crate::events::Scroll;
use crate::rect::Rect;
use cgmath::{EuclideanSpace, Point2, Vector2};
use crossbeam::channel::{self, Receiver, Sender};
use log::trace;
use pinstack_core::{
    EngineConfig, Placements, PositionSource, RenderSink, StickyError, StickyItem,
    StickyLayoutEngine,
};
use thiserror::Error;

/// Errors from a host layout pass.
#[derive(Error, Debug)]
pub enum HostError<E> {
    #[error(transparent)]
    Layout(#[from] StickyError),
    #[error("render sink failed: {0}")]
    Sink(E),
}

/// Moves content-space rectangles into the viewport’s coordinate space.
struct ViewportSpace(Vector2<f64>);

impl PositionSource<Rect> for ViewportSpace {
    fn top_edge(&self, region: &Rect) -> Option<f64> {
        Some(region.translated(self.0).min_y())
    }
}

/// Connects scroll events to a sticky layout engine and a render sink.
///
/// Content regions are rectangles in content coordinates, where the content origin sits at the
/// viewport top when nothing has been scrolled.
pub struct StickyHost<S> {
    engine: StickyLayoutEngine<Rect>,
    offset: Point2<f64>,
    placements: Placements,
    sink: S,
    event_send: Sender<Scroll>,
    event_recv: Receiver<Scroll>,
}

impl<S: RenderSink> StickyHost<S> {
    /// Creates a new host with nothing registered.
    pub fn new(sink: S) -> StickyHost<S> {
        StickyHost::with_engine(StickyLayoutEngine::new(), sink)
    }

    /// Creates a new host with a custom engine configuration.
    pub fn with_config(config: EngineConfig, sink: S) -> Result<StickyHost<S>, StickyError> {
        Ok(StickyHost::with_engine(
            StickyLayoutEngine::with_config(config)?,
            sink,
        ))
    }

    fn with_engine(engine: StickyLayoutEngine<Rect>, sink: S) -> StickyHost<S> {
        let (event_send, event_recv) = channel::unbounded();
        StickyHost {
            engine,
            offset: Point2::origin(),
            placements: Placements::default(),
            sink,
            event_send,
            event_recv,
        }
    }

    /// Returns a sender for scroll events; may be moved to whichever thread observes scrolling.
    pub fn scroll_sender(&self) -> Sender<Scroll> {
        self.event_send.clone()
    }

    /// Replaces the registered items and lays them out at the current scroll offset.
    pub fn register<I>(&mut self, items: I) -> Result<(), HostError<S::Error>>
    where
        I: IntoIterator<Item = StickyItem<Rect>>,
    {
        self.engine.register(items)?;
        self.layout()
    }

    /// Receives all pending scroll events and lays out once for the latest one.
    ///
    /// Returns false if there was nothing to do.
    pub fn poll(&mut self) -> Result<bool, HostError<S::Error>> {
        let (latest, count) = self
            .event_recv
            .try_iter()
            .fold((None, 0usize), |(_, count), event| (Some(event), count + 1));

        match latest {
            Some(scroll) => {
                trace!("coalesced {} scroll events", count);
                self.scroll_to(scroll)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Lays out immediately for the given scroll position.
    pub fn scroll_to(&mut self, scroll: Scroll) -> Result<(), HostError<S::Error>> {
        self.offset = scroll.offset;
        self.layout()
    }

    fn layout(&mut self) -> Result<(), HostError<S::Error>> {
        let space = ViewportSpace(-self.offset.to_vec());
        let placements = self.engine.compute_from_source(&space)?;
        trace!(
            "offset {:?}: {} of {} pinned, stack height {}",
            self.offset,
            placements.shown().count(),
            placements.len(),
            placements.stack_height()
        );
        self.sink.apply(&placements).map_err(HostError::Sink)?;
        self.placements = placements;
        Ok(())
    }

    /// The current scroll offset.
    pub fn offset(&self) -> Point2<f64> {
        self.offset
    }

    /// Placements from the most recent pass.
    pub fn placements(&self) -> &Placements {
        &self.placements
    }

    pub fn engine(&self) -> &StickyLayoutEngine<Rect> {
        &self.engine
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }
}
