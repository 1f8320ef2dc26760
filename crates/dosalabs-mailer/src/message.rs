//! Message builders.
//!
//! Pure functions from a booking record to an outbound email. Two message
//! types exist, with fixed recipients: the guest confirmation and the
//! studio's instructor alert.

use dosalabs_core::models::booking::BookingRecord;

pub const SENDER: &str = "Dosalabs <hello@dosalabs.io>";
pub const REPLY_TO: &str = "hello@dosalabs.io";

/// Internal inbox that receives instructor alerts for every new booking.
pub const STUDIO_INBOX: &str = "hello@dosalabs.io";

/// Guest-facing dashboard, keyed by the booking's idempotency token.
pub const DASHBOARD_URL: &str = "https://dosalabs.io/#/dashboard";

/// An outbound email, ready for the provider. Sender and reply-to are fixed
/// at dispatch time.
#[derive(Debug, Clone)]
pub struct EmailMessage {
    pub to: String,
    pub subject: String,
    pub html: Option<String>,
    pub text: Option<String>,
}

/// Build the guest confirmation email for a booking.
pub fn build_confirmation(record: &BookingRecord) -> EmailMessage {
    let guest_name = &record.guest_name;
    let lab_name = &record.lab_name;
    let booking_id = &record.booking_id;
    let datetime = record.datetime_iso.replace('T', " ");
    let amount = format_dollars(record.amount_cents);
    let dashboard_link = format!("{DASHBOARD_URL}?bid={}", record.booking_request_id);

    let subject = format!("Lab Confirmed: {lab_name} [{booking_id}]");
    let html = format!(
        r#"
      <div style="font-family: sans-serif; max-width: 600px; margin: 0 auto; border: 1px solid #E6E7EB; border-radius: 24px; overflow: hidden; background: #FFF;">
        <div style="background-color: #0B0B0C; padding: 48px 40px; text-align: center;">
          <h1 style="color: #BF9264; margin: 0; font-size: 24px; text-transform: uppercase; letter-spacing: 3px; font-weight: 800;">Confirmed</h1>
        </div>
        <div style="padding: 40px; color: #0B0B0C; line-height: 1.6;">
          <p style="font-size: 16px;">Hi {guest_name},</p>
          <p style="font-size: 16px;">Your <strong>{lab_name}</strong> session is officially in the calendar.</p>
          <div style="background-color: #F6F7F8; padding: 32px; border-radius: 16px; margin: 32px 0; border: 1px solid #EDEFF2;">
            <p style="margin: 0 0 12px 0; font-size: 14px; color: #3A3D42;"><strong>Booking ID:</strong> <span style="font-family: monospace; font-weight: bold; color: #0B0B0C;">{booking_id}</span></p>
            <p style="margin: 0 0 12px 0; font-size: 14px; color: #3A3D42;"><strong>Date/Time:</strong> {datetime}</p>
            <p style="margin: 0; font-size: 14px; color: #3A3D42;"><strong>Amount Paid:</strong> {amount}</p>
          </div>
          <p style="font-size: 14px; color: #3A3D42; margin-bottom: 24px;">Click below to access your Lab Dashboard where you can find your technical prep packet and ingredient sourcing guide.</p>
          <a href="{dashboard_link}" style="display: inline-block; background-color: #0B0B0C; color: #FFFFFF; padding: 18px 36px; border-radius: 100px; text-decoration: none; font-weight: bold; font-size: 14px; text-transform: uppercase; letter-spacing: 1px;">Access Guest Dashboard</a>
        </div>
      </div>
    "#
    );

    EmailMessage {
        to: record.email.clone(),
        subject,
        html: Some(html),
        text: None,
    }
}

/// Build the operational alert sent to the studio inbox for a new booking.
pub fn build_instructor_alert(record: &BookingRecord) -> EmailMessage {
    let subject = format!(
        "New Lab Booking: {} [{}]",
        record.lab_name, record.booking_id
    );
    let text = format!(
        "New booking {booking_id} confirmed.\n\n\
         Lab: {lab_name}\n\
         Guest: {guest_name} <{email}>\n\
         Date/Time: {datetime}\n\
         Amount Paid: {amount}\n",
        booking_id = record.booking_id,
        lab_name = record.lab_name,
        guest_name = record.guest_name,
        email = record.email,
        datetime = record.datetime_iso.replace('T', " "),
        amount = format_dollars(record.amount_cents),
    );

    EmailMessage {
        to: STUDIO_INBOX.to_string(),
        subject,
        html: None,
        text: Some(text),
    }
}

/// Cents to a `$12.34`-style string. Prices are whole cents; no rounding.
fn format_dollars(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}
