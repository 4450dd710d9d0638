use std::fmt::{Debug, Formatter};

use chrono::{Datelike, Local};

use crate::applicator::{DefaultTargetProvider, NoDefaultTarget, TargetSlot};
use crate::error::SeasonError;
use crate::labels::LabelTarget;
use crate::seasons::{Location, Season, SeasonConvention, classify};

/// Applies the current meteorological season as a label on a target.
///
/// Keeps track of the label it applied last and swaps it out on every
/// [`update`](Self::update): the previous label is removed before the new one
/// is added, even if both are the same. Labels the target carries for other
/// reasons are never touched.
///
/// The target is resolved lazily, at most once per applicator:
/// - a target given to [`set_target`](Self::set_target) is used as is;
/// - a producer given to [`set_target_with`](Self::set_target_with) runs on
///   first use;
/// - otherwise the default target provider is asked.
///
/// Not safe for concurrent use: an update is a remove followed by an add.
pub struct SeasonApplicator<'a, T, C = Location> {
    location: C,
    label_prefix: String,
    target: TargetSlot<'a, T>,
    default_provider: Box<dyn DefaultTargetProvider<T> + 'a>,
    last_applied_season: Option<String>,
}

impl<'a, T: LabelTarget> SeasonApplicator<'a, T, Location> {
    /// Northern Hemisphere convention, no label prefix, no target.
    pub fn new() -> Self {
        Self::with_location(Location::default())
    }
}

impl<'a, T: LabelTarget> Default for SeasonApplicator<'a, T, Location> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T, C> SeasonApplicator<'a, T, C>
where
    T: LabelTarget,
    C: SeasonConvention,
{
    pub fn with_location(location: C) -> Self {
        Self {
            location,
            label_prefix: String::new(),
            target: TargetSlot::Unset,
            default_provider: Box::new(NoDefaultTarget),
            last_applied_season: None,
        }
    }

    /// Prefix prepended to every label added or removed, e.g. `"app-"`.
    pub fn with_prefix<P: Into<String>>(mut self, prefix: P) -> Self {
        self.label_prefix = prefix.into();
        self
    }

    pub fn with_default_provider<P>(mut self, provider: P) -> Self
    where
        P: DefaultTargetProvider<T> + 'a,
    {
        self.default_provider = Box::new(provider);
        self
    }

    pub fn location(&self) -> &C {
        &self.location
    }

    /// Swaps the convention. The label applied so far stays tracked and is
    /// removed by the next update.
    pub fn set_location(&mut self, location: C) {
        self.location = location;
    }

    pub fn label_prefix(&self) -> &str {
        &self.label_prefix
    }

    pub fn set_target(&mut self, target: T) {
        self.target = TargetSlot::Direct(target);
    }

    /// Sets a producer that is invoked once, when the target is first needed.
    pub fn set_target_with<F>(&mut self, produce: F)
    where
        F: FnOnce() -> Option<T> + 'a,
    {
        self.target = TargetSlot::Producer(Box::new(produce));
    }

    /// The target, resolving it first if needed. `None` if nothing could be
    /// resolved.
    pub fn target(&mut self) -> Option<&mut T> {
        self.target.resolve(&*self.default_provider)
    }

    /// The label most recently added by this applicator.
    pub fn last_applied_season(&self) -> Option<&str> {
        self.last_applied_season.as_deref()
    }

    /// Label applied for `season`, including the prefix.
    pub fn label_for(&self, season: Season) -> String {
        format!("{}{}", self.label_prefix, season)
    }

    pub fn meteorological_season<D: Datelike>(&self, date: &D) -> Season {
        classify(&self.location, date)
    }

    pub fn meteorological_season_now(&self) -> Season {
        self.meteorological_season(&Local::now())
    }

    /// Applies the season of `date` to the target and returns the applied
    /// label.
    ///
    /// Fails with [`SeasonError::AbsentTarget`] if no target can be
    /// resolved; nothing is recorded in that case.
    pub fn update<D: Datelike>(&mut self, date: &D) -> Result<&str, SeasonError> {
        let label = self.label_for(self.meteorological_season(date));

        let Some(target) = self.target.resolve(&*self.default_provider) else {
            log::warn!("no target to apply season label '{label}' to");
            return Err(SeasonError::AbsentTarget);
        };

        if let Some(previous) = &self.last_applied_season {
            target.remove_label(previous);
        }
        target.add_label(&label);

        log::debug!(
            "applied season label '{label}' (previous: {:?}, location: {})",
            self.last_applied_season,
            self.location.name()
        );

        Ok(self.last_applied_season.insert(label).as_str())
    }

    pub fn update_now(&mut self) -> Result<&str, SeasonError> {
        self.update(&Local::now())
    }
}

impl<'a, T: Debug, C: Debug> Debug for SeasonApplicator<'a, T, C> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SeasonApplicator")
            .field("location", &self.location)
            .field("label_prefix", &self.label_prefix)
            .field("target", &self.target)
            .field("last_applied_season", &self.last_applied_season)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::applicator::FirstOf;
    use crate::labels::ClassList;
    use crate::seasons::QuarterTable;
    use crate::testing::dummies::{date, mid_month};
    use crate::testing::stubs::{CountingProducer, LabelCall, RecordingTarget};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn applicator_on(target: &RecordingTarget) -> SeasonApplicator<'static, RecordingTarget> {
        let mut applicator = SeasonApplicator::new();
        applicator.set_target(target.clone());
        applicator
    }

    #[test]
    fn starts_northern_without_label() {
        let applicator: SeasonApplicator<'_, ClassList> = SeasonApplicator::new();
        assert_eq!(*applicator.location(), Location::NorthernHemisphere);
        assert_eq!(applicator.label_prefix(), "");
        assert!(applicator.last_applied_season().is_none());
    }

    #[test]
    fn first_update_only_adds() {
        let target = RecordingTarget::new();
        let mut applicator = applicator_on(&target);

        let applied = applicator.update(&date(2024, 1, 10)).unwrap();
        assert_eq!(applied, "winter");
        assert_eq!(applicator.last_applied_season(), Some("winter"));
        assert_eq!(target.calls(), vec![LabelCall::Add("winter".into())]);
    }

    #[test]
    fn same_season_removes_then_adds_without_duplicates() {
        let target = RecordingTarget::new();
        let mut applicator = applicator_on(&target);

        applicator.update(&date(2024, 6, 1)).unwrap();
        applicator.update(&date(2024, 8, 31)).unwrap();

        assert_eq!(applicator.last_applied_season(), Some("summer"));
        assert_eq!(target.labels().to_string(), "summer");
        assert_eq!(
            target.calls(),
            vec![
                LabelCall::Add("summer".into()),
                LabelCall::Remove("summer".into()),
                LabelCall::Add("summer".into()),
            ]
        );
    }

    #[test]
    fn transition_replaces_previous_label() {
        let target = RecordingTarget::with_labels("page dark");
        let mut applicator = applicator_on(&target);

        applicator.update(&mid_month(2024, 11)).unwrap();
        applicator.update(&mid_month(2024, 12)).unwrap();

        let labels = target.labels();
        assert!(!labels.contains("autumn"));
        assert!(labels.contains("winter"));
        assert_eq!(labels.to_string(), "page dark winter");
    }

    #[test]
    fn prefix_applies_to_add_and_remove() {
        let target = RecordingTarget::new();
        let mut applicator = SeasonApplicator::new().with_prefix("app-");
        applicator.set_target(target.clone());

        applicator.update(&date(2024, 2, 29)).unwrap();
        applicator.update(&date(2024, 3, 1)).unwrap();

        assert_eq!(applicator.label_for(Season::Winter), "app-winter");
        assert_eq!(
            target.calls(),
            vec![
                LabelCall::Add("app-winter".into()),
                LabelCall::Remove("app-winter".into()),
                LabelCall::Add("app-spring".into()),
            ]
        );
        assert_eq!(target.labels().to_string(), "app-spring");
    }

    #[test]
    fn producer_runs_once_across_updates() {
        let target = RecordingTarget::new();
        let producer = CountingProducer::default();
        let mut applicator = SeasonApplicator::with_location(Location::India);
        applicator.set_target_with(producer.producing(Some(target.clone())));
        assert_eq!(producer.calls(), 0);

        for month in [1, 4, 7, 10, 12] {
            applicator.update(&mid_month(2024, month)).unwrap();
        }

        assert_eq!(producer.calls(), 1);
        assert_eq!(target.labels().to_string(), "winter");
    }

    #[test]
    fn default_provider_is_used_when_no_target_set() {
        let body = Rc::new(RefCell::new(ClassList::new()));
        let mut applicator = SeasonApplicator::with_location(Location::SouthernHemisphere)
            .with_default_provider(FirstOf::new(vec![Rc::clone(&body)]));

        applicator.update(&date(2024, 7, 4)).unwrap();
        assert_eq!(body.borrow().to_string(), "winter");
    }

    #[test]
    fn explicit_target_wins_over_default_provider() {
        let producer = CountingProducer::default();
        let target = RecordingTarget::new();
        let mut applicator = SeasonApplicator::new()
            .with_default_provider(producer.provider(Some(RecordingTarget::new())));
        applicator.set_target(target.clone());

        applicator.update(&date(2024, 5, 5)).unwrap();
        assert_eq!(producer.calls(), 0);
        assert_eq!(target.labels().to_string(), "spring");
    }

    #[test]
    fn absent_target_fails_without_recording() {
        let producer = CountingProducer::default();
        let mut applicator: SeasonApplicator<'_, RecordingTarget> =
            SeasonApplicator::new().with_default_provider(producer.provider(None));

        assert_eq!(
            applicator.update(&date(2024, 1, 1)),
            Err(SeasonError::AbsentTarget)
        );
        assert_eq!(
            applicator.update(&date(2024, 6, 1)),
            Err(SeasonError::AbsentTarget)
        );
        assert!(applicator.last_applied_season().is_none());
        assert!(applicator.target().is_none());
        assert_eq!(producer.calls(), 1);
    }

    #[test]
    fn producer_yielding_nothing_is_absent_target() {
        let mut applicator: SeasonApplicator<'_, ClassList> = SeasonApplicator::new();
        applicator.set_target_with(|| None);
        assert_eq!(
            applicator.update(&date(2024, 1, 1)),
            Err(SeasonError::AbsentTarget)
        );
    }

    #[test]
    fn borrowed_targets_are_supported() {
        let mut list: ClassList = "layout".parse().unwrap();
        {
            let mut applicator = SeasonApplicator::new();
            applicator.set_target(&mut list);
            applicator.update(&date(2024, 9, 1)).unwrap();
        }
        assert_eq!(list.to_string(), "layout autumn");
    }

    #[test]
    fn switching_location_removes_old_label() {
        let target = RecordingTarget::new();
        let mut applicator = applicator_on(&target);

        applicator.update(&date(2024, 7, 1)).unwrap();
        applicator.set_location(Location::India);
        applicator.update(&date(2024, 7, 1)).unwrap();

        assert_eq!(target.labels().to_string(), "monsoon");
    }

    #[test]
    fn custom_conventions_plug_in() {
        let wet_dry = QuarterTable::new(
            "wet-dry",
            [Season::Summer, Season::Summer, Season::Winter, Season::Winter],
        );
        let mut applicator = SeasonApplicator::with_location(wet_dry).with_prefix("wd-");
        let target = RecordingTarget::new();
        applicator.set_target(target.clone());

        assert_eq!(applicator.location().name(), "wet-dry");
        applicator.update(&date(2024, 10, 1)).unwrap();
        assert_eq!(target.labels().to_string(), "wd-winter");
    }

    #[test]
    fn meteorological_season_does_not_touch_target() {
        let target = RecordingTarget::new();
        let applicator = applicator_on(&target);

        assert_eq!(
            applicator.meteorological_season(&date(2024, 4, 1)),
            Season::Spring
        );
        let now = applicator.meteorological_season_now();
        assert!(Location::NorthernHemisphere.vocabulary().contains(&now));
        assert!(target.calls().is_empty());
    }

    #[test]
    fn update_now_applies_current_season() {
        let target = RecordingTarget::new();
        let mut applicator = applicator_on(&target);

        let applied = applicator.update_now().unwrap().to_string();
        let expected = applicator.label_for(applicator.meteorological_season_now());
        assert_eq!(applied, expected);
        assert!(target.labels().contains(&applied));
    }
}
