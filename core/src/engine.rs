use crate::backend::{PositionLookup, PositionSource};
use crate::config::{EngineConfig, SOFT_ITEM_LIMIT};
use crate::error::StickyError;
use crate::item::{ItemId, StickyItem};
use crate::placement::{Placement, Placements};
use log::{debug, trace, warn};
use std::collections::HashSet;

/// Decides which pinned elements are visible and where they stack.
///
/// Holds the ordered registry of sticky items. Each layout pass is a pure function of the
/// registry and the positions passed in; the engine keeps no state between passes.
#[derive(Debug, Clone)]
pub struct StickyLayoutEngine<R = ()> {
    items: Vec<StickyItem<R>>,
    config: EngineConfig,
}

impl<R> Default for StickyLayoutEngine<R> {
    fn default() -> Self {
        StickyLayoutEngine::new()
    }
}

impl<R> StickyLayoutEngine<R> {
    /// Creates an empty engine with the default configuration.
    pub fn new() -> StickyLayoutEngine<R> {
        StickyLayoutEngine {
            items: Vec::new(),
            config: EngineConfig::default(),
        }
    }

    /// Creates an empty engine, validating the configuration first.
    pub fn with_config(config: EngineConfig) -> Result<StickyLayoutEngine<R>, StickyError> {
        config.validate()?;
        Ok(StickyLayoutEngine {
            items: Vec::new(),
            config,
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn tolerance(&self) -> f64 {
        self.config.tolerance
    }

    /// Registered items, in registration order.
    pub fn items(&self) -> &[StickyItem<R>] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Replaces the registry with the given items, keeping their order.
    ///
    /// Either every item is accepted or the registry is left as it was.
    pub fn register<I>(&mut self, items: I) -> Result<(), StickyError>
    where
        I: IntoIterator<Item = StickyItem<R>>,
    {
        let items: Vec<_> = items.into_iter().collect();
        validate(&items)?;

        if items.len() > SOFT_ITEM_LIMIT {
            warn!(
                "registering {} sticky items; more than {} is unusual",
                items.len(),
                SOFT_ITEM_LIMIT
            );
        }
        debug!("registered {} sticky items", items.len());

        self.items = items;
        Ok(())
    }

    /// Runs a layout pass.
    ///
    /// Walks the items in registration order, keeping a running stack height. An item is shown
    /// once its region’s top edge reaches the bottom of the stack (within the tolerance); shown
    /// items then push the stack down by their pinned height. Hidden items take no space.
    ///
    /// Fails without a result if any registered item has no position.
    pub fn compute_visibility<P>(&self, positions: &P) -> Result<Placements, StickyError>
    where
        P: PositionLookup + ?Sized,
    {
        self.layout(|item| {
            positions
                .top_edge(item.id())
                .ok_or_else(|| StickyError::MissingPosition(item.id().clone()))
        })
    }

    /// Runs a layout pass, asking the source where each item’s region is.
    pub fn compute_from_source<S>(&self, source: &S) -> Result<Placements, StickyError>
    where
        S: PositionSource<R> + ?Sized,
    {
        self.layout(|item| {
            source
                .top_edge(item.region())
                .ok_or_else(|| StickyError::MissingPosition(item.id().clone()))
        })
    }

    fn layout<F>(&self, mut top_edge: F) -> Result<Placements, StickyError>
    where
        F: FnMut(&StickyItem<R>) -> Result<f64, StickyError>,
    {
        let tolerance = self.config.tolerance;
        let mut rows = Vec::with_capacity(self.items.len());
        let mut stack_height = 0.;

        for item in &self.items {
            let min_y = top_edge(item)?;
            let shown = min_y <= stack_height + tolerance;
            trace!(
                "item {}: min_y {} against stack {} -> {}",
                item.id(),
                min_y,
                stack_height,
                if shown { "shown" } else { "hidden" }
            );

            rows.push(Placement {
                id: item.id().clone(),
                shown,
                offset: stack_height,
            });

            if shown {
                stack_height += item.pinned_height();
            }
        }

        Ok(Placements { rows, stack_height })
    }

    /// Ids of the registered items, in order.
    pub fn ids(&self) -> impl Iterator<Item = &ItemId> + '_ {
        self.items.iter().map(StickyItem::id)
    }
}

fn validate<R>(items: &[StickyItem<R>]) -> Result<(), StickyError> {
    let mut seen = HashSet::with_capacity(items.len());
    for item in items {
        let height = item.pinned_height();
        if !height.is_finite() || height < 0. {
            return Err(StickyError::InvalidHeight {
                id: item.id().clone(),
                height,
            });
        }
        if !seen.insert(item.id()) {
            return Err(StickyError::DuplicateId(item.id().clone()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn engine(items: &[(&str, f64)]) -> StickyLayoutEngine {
        let mut engine = StickyLayoutEngine::new();
        engine
            .register(items.iter().map(|&(id, h)| StickyItem::detached(id, h)))
            .unwrap();
        engine
    }

    fn positions(entries: &[(&str, f64)]) -> HashMap<ItemId, f64> {
        entries.iter().map(|&(id, y)| (ItemId::from(id), y)).collect()
    }

    fn rows(placements: Placements) -> Vec<(String, bool, f64)> {
        placements
            .into_iter()
            .map(|p| (p.id.to_string(), p.shown, p.offset))
            .collect()
    }

    #[test]
    fn threshold_is_inclusive_of_tolerance() {
        let engine = engine(&[("a", 40.)]);

        let shown = engine.compute_visibility(&positions(&[("a", -1.)])).unwrap();
        assert!(shown[0].is_shown());

        let edge = engine.compute_visibility(&positions(&[("a", 1.)])).unwrap();
        assert!(edge[0].is_shown());

        let hidden = engine.compute_visibility(&positions(&[("a", 2.)])).unwrap();
        assert!(!hidden[0].is_shown());
    }

    #[test]
    fn zero_tolerance_is_strict() {
        let mut engine = StickyLayoutEngine::with_config(EngineConfig { tolerance: 0. }).unwrap();
        engine.register(vec![StickyItem::detached("a", 10.)]).unwrap();

        let at = engine.compute_visibility(&positions(&[("a", 0.)])).unwrap();
        assert!(at[0].is_shown());
        let below = engine.compute_visibility(&positions(&[("a", 0.5)])).unwrap();
        assert!(!below[0].is_shown());
    }

    #[test]
    fn hidden_items_take_no_space() {
        let engine = engine(&[("a", 20.), ("b", 30.), ("c", 40.)]);
        // b is hidden, so c only needs to reach the bottom of a
        let result = engine
            .compute_visibility(&positions(&[("a", -100.), ("b", 500.), ("c", 20.)]))
            .unwrap();
        assert_eq!(
            rows(result.clone()),
            vec![
                ("a".into(), true, 0.),
                ("b".into(), false, 20.),
                ("c".into(), true, 20.),
            ]
        );
        assert_eq!(result.stack_height(), 60.);
    }

    #[test]
    fn identical_positions_stack_in_registration_order() {
        let engine = engine(&[("first", 10.), ("second", 10.)]);
        let result = engine
            .compute_visibility(&positions(&[("first", 0.), ("second", 0.)]))
            .unwrap();
        // second would have needed to reach 10 once first is pinned
        assert_eq!(
            rows(result),
            vec![("first".into(), true, 0.), ("second".into(), true, 10.)]
        );
    }

    #[test]
    fn missing_position_fails_the_whole_pass() {
        let engine = engine(&[("a", 10.), ("b", 10.)]);
        let err = engine
            .compute_visibility(&positions(&[("a", -50.)]))
            .unwrap_err();
        assert_eq!(err, StickyError::MissingPosition("b".into()));
        assert_eq!(err.to_string(), "no position supplied for item `b`");
    }

    #[test]
    fn empty_registry_yields_empty_result() {
        let mut engine = engine(&[("a", 10.)]);
        engine.register(Vec::new()).unwrap();
        assert!(engine.is_empty());

        let result = engine.compute_visibility(&HashMap::<ItemId, f64>::new()).unwrap();
        assert!(result.is_empty());
        assert_eq!(result.stack_height(), 0.);
    }

    #[test]
    fn extra_positions_are_ignored() {
        let engine = engine(&[("a", 10.)]);
        let result = engine
            .compute_visibility(&positions(&[("a", 5.), ("ghost", -5.)]))
            .unwrap();
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn closures_can_supply_positions() {
        let engine = engine(&[("a", 10.), ("b", 10.)]);
        let lookup = |id: &ItemId| if id.as_str() == "a" { Some(-3.) } else { Some(400.) };
        let result = engine.compute_visibility(&lookup).unwrap();
        assert_eq!(result.shown().count(), 1);
        assert_eq!(result.get(&"b".into()).map(Placement::offset), Some(10.));
    }

    #[test]
    fn negative_height_is_rejected_atomically() {
        let mut engine = engine(&[("keep", 25.)]);
        let err = engine
            .register(vec![
                StickyItem::detached("ok", 5.),
                StickyItem::detached("x", -1.),
            ])
            .unwrap_err();
        assert_eq!(
            err,
            StickyError::InvalidHeight {
                id: "x".into(),
                height: -1.
            }
        );
        assert_eq!(engine.ids().map(ItemId::as_str).collect::<Vec<_>>(), ["keep"]);
    }

    #[test]
    fn non_finite_heights_are_rejected() {
        let mut engine = StickyLayoutEngine::new();
        assert!(engine
            .register(vec![StickyItem::detached("nan", f64::NAN)])
            .is_err());
        assert!(engine
            .register(vec![StickyItem::detached("inf", f64::INFINITY)])
            .is_err());
        assert!(engine.is_empty());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut engine = engine(&[("keep", 25.)]);
        let err = engine
            .register(vec![
                StickyItem::detached("a", 5.),
                StickyItem::detached("b", 5.),
                StickyItem::detached("a", 7.),
            ])
            .unwrap_err();
        assert_eq!(err, StickyError::DuplicateId("a".into()));
        assert_eq!(engine.len(), 1);
    }

    #[test]
    fn no_hard_item_limit() {
        let ids: Vec<String> = (0..10).map(|i| format!("item-{}", i)).collect();
        let mut engine = StickyLayoutEngine::new();
        engine
            .register(ids.iter().map(|id| StickyItem::detached(id.as_str(), 10.)))
            .unwrap();

        let all_scrolled: HashMap<ItemId, f64> =
            ids.iter().map(|id| (ItemId::from(id.as_str()), -1000.)).collect();
        let result = engine.compute_visibility(&all_scrolled).unwrap();
        assert_eq!(result.shown().count(), 10);
        assert_eq!(result[9].offset(), 90.);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let err = StickyLayoutEngine::<()>::with_config(EngineConfig { tolerance: -2. })
            .unwrap_err();
        assert_eq!(err, StickyError::InvalidTolerance(-2.));
    }
}
