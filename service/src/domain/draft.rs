//! [`Draft`] of a visit schedule.

use common::Date;
use serde::Deserialize;
use time::UtcOffset;

use super::{
    customer, employee, property,
    schedule::VisitDateTime,
    slot::{self, DisplayMode, TimeOfDay},
    NewSchedule, Picker,
};

/// Policy of treating the resolved [`VisitDateTime`] once the [`Date`] of a
/// [`Draft`] changes.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum DateChangePolicy {
    /// Resolve the selected time again on the new [`Date`].
    #[default]
    Recompute,

    /// Keep the [`VisitDateTime`] resolved on the previous [`Date`] until a
    /// time is selected again.
    KeepResolved,
}

/// Unsaved state of a visit being scheduled.
///
/// Lives only while the booking dialog is open.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Draft {
    /// Customer the visit is scheduled for.
    customer_id: customer::Id,

    /// Employee who books the visit.
    employee_id: employee::Id,

    /// [`Date`] of the visit.
    date: Date,

    /// Selector of the visit time.
    slots: slot::Selector,

    /// Picker of the property to visit.
    picker: Picker,

    /// Absolute [`VisitDateTime`] resolved from the `date` and the selected
    /// time.
    visit_schedule: Option<VisitDateTime>,
}

impl Draft {
    /// Creates a new empty [`Draft`].
    #[must_use]
    pub fn new(
        customer_id: customer::Id,
        employee_id: employee::Id,
        date: Date,
        mode: DisplayMode,
    ) -> Self {
        Self {
            customer_id,
            employee_id,
            date,
            slots: slot::Selector::new(mode),
            picker: Picker::default(),
            visit_schedule: None,
        }
    }

    /// Returns ID of the customer this [`Draft`] is for.
    #[must_use]
    pub fn customer_id(&self) -> customer::Id {
        self.customer_id
    }

    /// Returns ID of the employee booking this [`Draft`].
    #[must_use]
    pub fn employee_id(&self) -> employee::Id {
        self.employee_id
    }

    /// Returns the [`Date`] of the visit.
    #[must_use]
    pub fn date(&self) -> Date {
        self.date
    }

    /// Returns the time [`slot::Selector`].
    #[must_use]
    pub fn slots(&self) -> &slot::Selector {
        &self.slots
    }

    /// Returns the property [`Picker`].
    #[must_use]
    pub fn picker(&self) -> &Picker {
        &self.picker
    }

    /// Returns the property [`Picker`] for modification.
    pub fn picker_mut(&mut self) -> &mut Picker {
        &mut self.picker
    }

    /// Returns the resolved [`VisitDateTime`], if any time is selected.
    #[must_use]
    pub fn visit_schedule(&self) -> Option<VisitDateTime> {
        self.visit_schedule
    }

    /// Returns ID of the selected property, if any.
    #[must_use]
    pub fn property_id(&self) -> Option<property::Id> {
        self.picker.selected_property()
    }

    /// Switches the [`DisplayMode`] of the time labels.
    pub fn select_display_mode(&mut self, mode: DisplayMode) {
        self.slots.select_display_mode(mode);
    }

    /// Selects the visit time by its label and resolves it on the current
    /// [`Date`] in the provided `offset`.
    ///
    /// A label which doesn't parse or doesn't resolve on the current [`Date`]
    /// clears the selection and returns [`None`].
    pub fn select_slot(
        &mut self,
        label: &str,
        offset: UtcOffset,
    ) -> Option<TimeOfDay> {
        let resolved = self
            .slots
            .select(label)
            .and_then(|t| Some((t, t.resolve(self.date, offset)?)));
        let Some((time, at)) = resolved else {
            self.slots.clear();
            self.visit_schedule = None;
            return None;
        };
        self.visit_schedule = Some(at);
        Some(time)
    }

    /// Changes the [`Date`] of the visit according to the provided
    /// [`DateChangePolicy`].
    pub fn set_date(
        &mut self,
        date: Date,
        offset: UtcOffset,
        policy: DateChangePolicy,
    ) {
        self.date = date;
        match policy {
            DateChangePolicy::Recompute => {
                self.visit_schedule =
                    self.slots.selected().and_then(|t| t.resolve(date, offset));
                if self.visit_schedule.is_none() {
                    self.slots.clear();
                }
            }
            DateChangePolicy::KeepResolved => {}
        }
    }

    /// Builds a [`NewSchedule`] request out of this [`Draft`].
    ///
    /// [`None`] is returned if either time or property is not selected yet.
    #[must_use]
    pub fn payload(&self) -> Option<NewSchedule> {
        Some(NewSchedule {
            visit_schedule: self.visit_schedule?,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            property_id: self.property_id()?,
        })
    }
}

#[cfg(test)]
mod spec {
    use time::macros::{date, offset};

    use super::{DateChangePolicy, Draft};
    use crate::domain::{
        property::{self, Property},
        slot::DisplayMode,
        Interest, Status,
    };

    fn draft() -> Draft {
        let mut draft = Draft::new(
            3.into(),
            5.into(),
            date!(2025 - 06 - 01),
            DisplayMode::Twelve,
        );
        draft.picker_mut().begin_load();
        draft.picker_mut().finish_load(Ok(vec![Interest {
            id: 70.into(),
            customer_id: 3.into(),
            property: Property {
                id: 7.into(),
                uid: "RS-007".into(),
                status: Status::Available,
            },
        }]));
        draft
    }

    #[test]
    fn builds_payload_in_utc() {
        let mut draft = draft();
        _ = draft.select_slot("2 30pm", offset!(+7)).unwrap();
        assert!(draft.picker_mut().select_row(70.into()));

        let payload = draft.payload().unwrap();

        assert_eq!(payload.visit_schedule.to_rfc3339(), "2025-06-01T07:30:00Z");
        assert_eq!(
            payload.visit_schedule.date_at(offset!(+7)),
            date!(2025 - 06 - 01),
        );
        assert_eq!(payload.property_id, property::Id::from(7));
        assert_eq!(u64::from(payload.customer_id), 3);
        assert_eq!(u64::from(payload.employee_id), 5);
    }

    #[test]
    fn no_payload_until_complete() {
        let mut draft = draft();
        assert_eq!(draft.payload(), None);

        _ = draft.select_slot("9 00am", offset!(UTC)).unwrap();
        assert_eq!(draft.payload(), None);

        assert!(draft.picker_mut().select_row(70.into()));
        assert!(draft.payload().is_some());
    }

    #[test]
    fn malformed_label_clears_resolved_time() {
        let mut draft = draft();
        _ = draft.select_slot("9 00am", offset!(UTC)).unwrap();
        assert!(draft.picker_mut().select_row(70.into()));

        assert_eq!(draft.select_slot("9am", offset!(UTC)), None);

        assert_eq!(draft.visit_schedule(), None);
        assert_eq!(draft.slots().selected(), None);
        assert_eq!(draft.payload(), None);
    }

    #[test]
    fn unresolvable_time_selects_nothing() {
        let mut draft = draft();
        draft.set_date(
            date!(9999 - 12 - 31),
            offset!(UTC),
            DateChangePolicy::Recompute,
        );

        assert_eq!(draft.select_slot("11 99pm", offset!(-5)), None);
        assert_eq!(draft.visit_schedule(), None);
        assert_eq!(draft.slots().selected(), None);

        _ = draft.select_slot("9 00am", offset!(UTC)).unwrap();
        assert_eq!(
            draft.visit_schedule().unwrap().to_rfc3339(),
            "9999-12-31T09:00:00Z",
        );
    }

    #[test]
    fn recomputes_on_date_change() {
        let mut draft = draft();
        _ = draft.select_slot("9 00am", offset!(UTC)).unwrap();

        draft.set_date(
            date!(2025 - 06 - 02),
            offset!(UTC),
            DateChangePolicy::Recompute,
        );

        assert_eq!(
            draft.visit_schedule().unwrap().to_rfc3339(),
            "2025-06-02T09:00:00Z",
        );
    }

    #[test]
    fn keeps_stale_time_on_date_change_if_configured() {
        let mut draft = draft();
        _ = draft.select_slot("9 00am", offset!(UTC)).unwrap();

        draft.set_date(
            date!(2025 - 06 - 02),
            offset!(UTC),
            DateChangePolicy::KeepResolved,
        );
        assert_eq!(
            draft.visit_schedule().unwrap().to_rfc3339(),
            "2025-06-01T09:00:00Z",
        );

        _ = draft.select_slot("9 00am", offset!(UTC)).unwrap();
        assert_eq!(
            draft.visit_schedule().unwrap().to_rfc3339(),
            "2025-06-02T09:00:00Z",
        );
    }
}
