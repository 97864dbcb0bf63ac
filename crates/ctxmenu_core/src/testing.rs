//! Recording test doubles for the surface and host seams.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::dismissal::{CancelToken, Signal};
use crate::error::MenuError;
use crate::geometry::{Point, Size, Viewport};
use crate::style::StyleLayers;
use crate::surface::{Host, Surface};

#[derive(Debug, Default)]
pub(crate) struct SurfaceLog {
    pub calls: Vec<&'static str>,
    pub measured: usize,
    pub positions: Vec<Point>,
    pub visible: bool,
    pub labels: Vec<String>,
    pub custom_css: Option<String>,
}

/// Surface with a fixed natural size. Clones share one log.
#[derive(Debug, Clone)]
pub(crate) struct MockSurface {
    pub log: Rc<RefCell<SurfaceLog>>,
    size: Size,
}

impl MockSurface {
    pub fn new(size: Size) -> Self {
        Self { log: Rc::default(), size }
    }
}

impl Surface for MockSurface {
    fn create(labels: &[&str], styles: &StyleLayers) -> Result<Self, MenuError> {
        let surface = Self::new(Size::new(100.0, 40.0));
        {
            let mut log = surface.log.borrow_mut();
            log.labels = labels.iter().map(|label| label.to_string()).collect();
            log.custom_css = styles.custom().map(String::from);
        }
        Ok(surface)
    }

    fn measure(&mut self) -> Size {
        let mut log = self.log.borrow_mut();
        log.calls.push("measure");
        log.measured += 1;
        self.size
    }

    fn set_position(&mut self, at: Point) {
        let mut log = self.log.borrow_mut();
        log.calls.push("set_position");
        log.positions.push(at);
    }

    fn set_visible(&mut self, visible: bool) {
        let mut log = self.log.borrow_mut();
        log.calls.push(if visible { "show" } else { "hide" });
        log.visible = visible;
    }

    fn is_visible(&self) -> bool {
        self.log.borrow().visible
    }
}

#[derive(Debug, Default)]
pub(crate) struct HostLog {
    pub subscribed: Vec<Vec<Signal>>,
    pub revoked: Vec<usize>,
    pub viewport_reads: usize,
}

/// Host with a settable viewport (1400×1400 by default). Clones share state.
#[derive(Debug, Clone)]
pub(crate) struct MockHost {
    pub log: Rc<RefCell<HostLog>>,
    pub viewport: Rc<Cell<Viewport>>,
    next_group: Rc<Cell<usize>>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self {
            log: Rc::default(),
            viewport: Rc::new(Cell::new(Viewport::new(1400.0, 1400.0))),
            next_group: Rc::default(),
        }
    }
}

/// Secondary-action event used by the mock host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Gesture {
    pub x: f64,
    pub y: f64,
    pub allow: bool,
}

impl Gesture {
    pub fn at(x: f64, y: f64) -> Self {
        Self { x, y, allow: true }
    }

    pub fn vetoed(mut self) -> Self {
        self.allow = false;
        self
    }
}

impl Host for MockHost {
    type Event = Gesture;
    type Group = usize;

    fn page_position(event: &Gesture) -> Point {
        Point::new(event.x, event.y)
    }

    fn viewport(&self) -> Viewport {
        self.log.borrow_mut().viewport_reads += 1;
        self.viewport.get()
    }

    fn subscribe(&mut self, signals: &[Signal], _token: &CancelToken) -> usize {
        self.log.borrow_mut().subscribed.push(signals.to_vec());
        let id = self.next_group.get();
        self.next_group.set(id + 1);
        id
    }

    fn revoke(&mut self, group: usize) {
        self.log.borrow_mut().revoked.push(group);
    }
}
