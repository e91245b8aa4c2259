// Rendering surface seam and exclusive ownership of the live chart instance
use crate::domain::chart::ChartConfig;

/// A drawing surface able to materialise a chart description.
pub trait RenderSurface {
    type Instance;

    fn create(&mut self, config: &ChartConfig) -> Self::Instance;

    /// Release an instance previously returned by `create`.
    fn destroy(&mut self, instance: Self::Instance);
}

/// Holds at most one live chart instance on a surface.
///
/// Replacing the chart always releases the previous instance before the new
/// one is created, and dropping the slot releases whatever is still live.
pub struct ChartSlot<S: RenderSurface> {
    surface: S,
    current: Option<S::Instance>,
}

impl<S: RenderSurface> ChartSlot<S> {
    pub fn new(surface: S) -> Self {
        Self {
            surface,
            current: None,
        }
    }

    pub fn replace(&mut self, config: &ChartConfig) -> &S::Instance {
        self.clear();
        self.current.insert(self.surface.create(config))
    }

    pub fn clear(&mut self) {
        if let Some(old) = self.current.take() {
            self.surface.destroy(old);
        }
    }

    pub fn current(&self) -> Option<&S::Instance> {
        self.current.as_ref()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: RenderSurface> Drop for ChartSlot<S> {
    fn drop(&mut self) {
        self.clear();
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::chart::ChartKind;
    use std::sync::{Arc, Mutex};

    /// Surface that records every call and asserts a single live instance.
    #[derive(Default, Clone)]
    pub(crate) struct RecordingSurface {
        pub events: Arc<Mutex<Vec<String>>>,
        live: usize,
        next_id: usize,
    }

    impl RecordingSurface {
        pub fn events(&self) -> Vec<String> {
            self.events.lock().unwrap().clone()
        }
    }

    impl RenderSurface for RecordingSurface {
        type Instance = (usize, Vec<String>);

        fn create(&mut self, config: &ChartConfig) -> Self::Instance {
            assert_eq!(self.live, 0, "previous chart still alive");
            self.live += 1;
            self.next_id += 1;
            self.events
                .lock()
                .unwrap()
                .push(format!("create {}", self.next_id));
            (self.next_id, config.labels.clone())
        }

        fn destroy(&mut self, instance: Self::Instance) {
            self.live -= 1;
            self.events
                .lock()
                .unwrap()
                .push(format!("destroy {}", instance.0));
        }
    }

    fn config(labels: &[&str]) -> ChartConfig {
        ChartConfig {
            kind: ChartKind::Bar,
            labels: labels.iter().map(|l| l.to_string()).collect(),
            series: Vec::new(),
            x_title: "Date".to_string(),
            max_x_ticks: 7,
            y_axes: Vec::new(),
        }
    }

    #[test]
    fn test_replace_destroys_before_create() {
        let surface = RecordingSurface::default();
        let mut slot = ChartSlot::new(surface.clone());

        slot.replace(&config(&["a"]));
        slot.replace(&config(&["b"]));
        let current = slot.replace(&config(&["c"]));
        assert_eq!(current.1, vec!["c"]);

        assert_eq!(
            surface.events(),
            vec!["create 1", "destroy 1", "create 2", "destroy 2", "create 3"]
        );
    }

    #[test]
    fn test_drop_releases_live_instance() {
        let surface = RecordingSurface::default();
        {
            let mut slot = ChartSlot::new(surface.clone());
            slot.replace(&config(&["a"]));
        }
        assert_eq!(surface.events(), vec!["create 1", "destroy 1"]);
    }

    #[test]
    fn test_clear_on_empty_slot_is_noop() {
        let surface = RecordingSurface::default();
        let mut slot = ChartSlot::new(surface.clone());
        slot.clear();
        assert!(slot.current().is_none());
        assert!(surface.events().is_empty());
    }
}
