//! Templates compiled into the binary.
//!
//! Used unless the configuration points at replacement files. Placeholders
//! are listed in `servicegen_core::domain::entities::template`.

/// `<name>.target`
pub const TARGET_TEMPLATE: &str = "\
[Unit]
Description={{DESCRIPTION}}

[Install]
WantedBy=multi-user.target
";

/// `<stem>.service`
pub const SERVICE_TEMPLATE: &str = "\
[Unit]
Description={{DESCRIPTION}}
After={{AFTER}}.target
PartOf={{TARGET}}.target

[Service]
WorkingDirectory={{DIRECTORY}}
ExecStart={{COMMAND}}

[Install]
WantedBy={{TARGET}}.target
";
