//! Commands of the `booking` client.

use service::{
    command::{LoadProperties, SubmitBooking},
    domain::{
        customer::{self, Customer},
        employee,
        picker::Rows,
        property,
        slot::{self, DisplayMode},
        wizard::{self, Outcome},
        Interest, Notification, Wizard,
    },
    query::Interests,
    Command as _,
};
use tokio::io::{self, AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};
use tracing as log;

use crate::{define_error, AsError, Error, Service};

define_error! {
    enum BookingError {
        #[code = "UNKNOWN_TIME"]
        #[message = "Visit time is not recognized"]
        UnknownTime,

        #[code = "PROPERTY_NOT_LISTED"]
        #[message = "Customer is not interested in this property"]
        PropertyNotListed,

        #[code = "PROPERTY_SOLD"]
        #[message = "Property is sold already"]
        PropertySold,
    }
}

/// Visit to book.
#[derive(Clone, Debug)]
pub struct Visit {
    /// [`Customer`] to book the visit for.
    pub customer: Customer,

    /// ID of the employee booking the visit.
    pub employee_id: employee::Id,

    /// Date of the visit.
    pub date: common::Date,

    /// Time label of the visit.
    pub time: String,

    /// ID of the property to visit.
    pub property_id: property::Id,
}

/// Returns the labels of all the bookable times in the provided
/// [`DisplayMode`].
#[must_use]
pub fn slots(mode: DisplayMode) -> Vec<String> {
    slot::Selector::new(mode).labels()
}

/// Loads the [`Interest`]s of the provided customer.
///
/// # Errors
///
/// If the [`Interest`]s cannot be loaded.
pub async fn interests(
    service: &Service,
    customer_id: customer::Id,
) -> Result<Vec<Interest>, Error> {
    service
        .execute(Interests::of(customer_id))
        .await
        .map_err(AsError::into_error)
}

/// Renders the provided [`Interest`] as a picker row.
#[must_use]
pub fn row(interest: &Interest) -> String {
    let property = &interest.property;
    let mark = if interest.is_selectable() { ' ' } else { '-' };
    format!("[{mark}] {} {} ({})", property.id, property.uid, property.status)
}

/// Books the provided [`Visit`], running a booking [`Wizard`] through all its
/// steps.
///
/// On a retryable failure, the user is asked whether to send the very same
/// request again.
///
/// # Errors
///
/// If the [`Visit`] cannot be booked.
pub async fn schedule(
    service: &Service,
    config: wizard::Config,
    visit: Visit,
) -> Result<Notification, Error> {
    let Visit {
        customer,
        employee_id,
        date,
        time,
        property_id,
    } = visit;

    let mut wizard = Wizard::new(config);
    wizard
        .open(
            date,
            customer,
            employee_id,
            common::datetime::today(config.utc_offset),
        )
        .map_err(AsError::into_error)?;

    let time = wizard.select_slot(&time).ok_or(BookingError::UnknownTime)?;
    log::debug!("visit time picked: {}", time.label(config.display_mode));
    _ = wizard.next();

    service
        .execute(LoadProperties(&mut wizard))
        .await
        .map_err(AsError::into_error)?;
    let picker = wizard.draft().map(|d| d.picker());
    let row = match picker.map(|p| (p.rows(), p.row_of(property_id))) {
        Some((Rows::Failed(msg), _)) => {
            return Err(Error::new("INTERESTS_UNAVAILABLE", msg.clone()));
        }
        Some((_, Some(row))) => row,
        Some((_, None)) | None => {
            return Err(BookingError::PropertyNotListed.into());
        }
    };
    if !wizard.select_row(row) {
        return Err(BookingError::PropertySold.into());
    }

    let mut outcome = service
        .execute(SubmitBooking::create(&mut wizard))
        .await
        .map_err(AsError::into_error)?;
    loop {
        let notification = outcome.notification();
        match outcome {
            Outcome::Created => return Ok(notification),
            Outcome::Failed(_) => {
                if !notification.retry || !confirm_retry(&notification).await {
                    return Err(Error::new(
                        "SCHEDULE_FAILED",
                        notification.message,
                    ));
                }
            }
        }
        outcome = service
            .execute(SubmitBooking::retry(&mut wizard))
            .await
            .map_err(AsError::into_error)?;
    }
}

/// Shows the provided [`Notification`] and asks on stdin whether to retry.
async fn confirm_retry(notification: &Notification) -> bool {
    let mut stdout = io::stdout();
    let prompt = format!("{}\nRetry? [y/N] ", notification.message);
    if stdout.write_all(prompt.as_bytes()).await.is_err()
        || stdout.flush().await.is_err()
    {
        return false;
    }

    let mut answer = String::new();
    match BufReader::new(io::stdin()).read_line(&mut answer).await {
        Ok(_) => is_yes(&answer),
        Err(e) => {
            log::warn!("failed to read answer: {e}");
            false
        }
    }
}

/// Indicates whether the provided `answer` confirms the prompt.
fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
