//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Mayday Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[diagnostics]
# enabled = false          # show devtools instead of failing; never relaunch on quit

[window]
# title = "Crash Report"
# width = 600              # >= 600
# height = 500             # >= 500
# background = "#ffffff"   # #RRGGBB or #RRGGBBAA

[content]
# entry = "mayday://localhost/crash/index.html"
# base_dir = "/path/to/assets"   # served under mayday://localhost/

[lifecycle]
# on_load_failure = "quit"       # quit, stay-hidden
# relaunch_program = ""          # unset = quit without relaunching
# relaunch_args = []             # arguments for relaunch_program

[logging]
# level = "info"                 # trace, debug, info, warn, error
"##
}
