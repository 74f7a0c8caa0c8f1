/// Simulator definitions compiled into the binary, in registration order.
pub fn builtin_simulators() -> Vec<(&'static str, &'static str)> {
    vec![(
        "dolphindive",
        include_str!("../content/simulators/dolphindive.json"),
    )]
}
