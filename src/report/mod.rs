// Report building and delivery
//
// A Record is built once per participant per room session and handed to
// whichever sinks the configuration enables: a per-room file tree and/or a
// webhook POST.

pub use file_sink::FileReportSink;
pub use record::Record;
pub use sink::ReportSink;
pub use webhook::WebhookSink;

mod file_sink;
mod record;
mod sink;
mod webhook;
