//! Events.

use cgmath::Point2;
use core::fmt;
use parking_lot::Mutex;
use pinstack_core::{Placements, RenderSink};
use std::convert::Infallible;
use std::sync::Arc;

/// A scroll event.
///
/// Carries the absolute content offset of the scroll surface rather than a delta, so any event
/// can stand in for all the ones before it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scroll {
    /// How far the content has scrolled; positive y means the content moved up.
    pub offset: Point2<f64>,
}

impl Scroll {
    pub fn to(x: f64, y: f64) -> Scroll {
        Scroll {
            offset: Point2::new(x, y),
        }
    }
}

/// A render sink backed by a closure.
///
/// Cloning shares the closure, so the same handler can be given to a host and kept around.
pub struct SinkHandler(Arc<Mutex<dyn FnMut(&Placements) + Send>>);

impl Clone for SinkHandler {
    fn clone(&self) -> Self {
        SinkHandler(Arc::clone(&self.0))
    }
}

impl SinkHandler {
    pub fn new<F: 'static + FnMut(&Placements) + Send>(handler: F) -> Self {
        SinkHandler(Arc::new(Mutex::new(handler)))
    }
}

impl RenderSink for SinkHandler {
    type Error = Infallible;

    fn apply(&mut self, placements: &Placements) -> Result<(), Infallible> {
        let mut handler = self.0.lock();
        (*handler)(placements);
        Ok(())
    }
}

impl fmt::Debug for SinkHandler {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "SinkHandler(..)")
    }
}
