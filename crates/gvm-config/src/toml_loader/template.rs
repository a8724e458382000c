//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# mygvm configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[run]
# steps = 1000               # instructions per tick, 1-1000000
# delay = 10                 # ms between ticks, 0-1000
# delay_enabled = true

[ui]
# Colors are written as #rgb or #rrggbb.
# background_color = "#ffffff"
# foreground_color = "#000000"
# pixel_scale = 2            # 1-8
"##
}
