//! Terminal notifier.

use crate::adapter::inbound::cli::output;
use crate::domain::notification::Notification;
use crate::port::outbound::notifier::Notifier;

/// Prints notifications through the CLI output helpers.
///
/// Respects `--json` and `--quiet` like every other CLI line.
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notification: Notification) {
        output::notification(&notification);
    }
}
