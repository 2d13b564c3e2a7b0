use carousel_core::CarouselConfig;

// `data-*` attributes on the carousel container that override engine defaults.
pub const CONFIG_ATTRS: [&str; 10] = [
    "data-radius",
    "data-drag-factor",
    "data-stiffness",
    "data-damping",
    "data-mass",
    "data-min-brightness",
    "data-max-brightness",
    "data-max-tilt",
    "data-front-zone",
    "data-perspective",
];

/// Apply one attribute to `config`. Range checks are left to
/// `CarouselConfig::validate`; this only parses.
pub fn apply_config_attr(config: &mut CarouselConfig, attr: &str, value: &str) -> anyhow::Result<()> {
    let slot = match attr {
        "data-radius" => &mut config.radius,
        "data-drag-factor" => &mut config.drag_factor,
        "data-stiffness" => &mut config.settle_stiffness,
        "data-damping" => &mut config.settle_damping,
        "data-mass" => &mut config.settle_mass,
        "data-min-brightness" => &mut config.min_brightness,
        "data-max-brightness" => &mut config.max_brightness,
        "data-max-tilt" => &mut config.max_tilt_deg,
        "data-front-zone" => &mut config.front_zone,
        "data-perspective" => &mut config.perspective,
        _ => anyhow::bail!("unknown carousel attribute {attr}"),
    };
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|e| anyhow::anyhow!("{attr}={value:?}: {e}"))?;
    *slot = parsed;
    Ok(())
}

/// Build a config from whichever attributes are present, keeping the default
/// for any that fail to parse. Returns the config and one message per failure.
pub fn config_from_attrs<'a>(
    attrs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> (CarouselConfig, Vec<String>) {
    let mut config = CarouselConfig::default();
    let mut problems = Vec::new();
    for (attr, value) in attrs {
        if let Err(e) = apply_config_attr(&mut config, attr, value) {
            problems.push(e.to_string());
        }
    }
    (config, problems)
}
