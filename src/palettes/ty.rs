pub(crate) use rgb::RGB;

/// One of the three color channels of a colormap.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorChannel {
    Red,
    Green,
    Blue,
}

impl ColorChannel {
    /// The three channels, in the order they are packed and emitted.
    pub const ALL: [ColorChannel; 3] =
        [ColorChannel::Red, ColorChannel::Green, ColorChannel::Blue];

    /// Name of the field holding this channel in a registry
    /// `SegmentData` struct.
    pub fn field(self) -> &'static str {
        match self {
            ColorChannel::Red => "r",
            ColorChannel::Green => "g",
            ColorChannel::Blue => "b",
        }
    }
}

impl std::fmt::Display for ColorChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            ColorChannel::Red => "red",
            ColorChannel::Green => "green",
            ColorChannel::Blue => "blue",
        })
    }
}

/// A sample of a piecewise-linear channel curve.
///
/// The curve reaches `before` when approaching `position` from the
/// left and leaves it with `after`, which allows discontinuities.
/// All three components are expected in \[0, 1\].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Breakpoint {
    pub position: f64,
    pub before: f64,
    pub after: f64,
}

impl Breakpoint {
    pub const fn new(position: f64, before: f64, after: f64) -> Self {
        Breakpoint { position, before, after }
    }

    /// A continuous breakpoint (`before == after == value`).
    pub const fn flat(position: f64, value: f64) -> Self {
        Breakpoint { position, before: value, after: value }
    }
}

impl From<(f64, f64, f64)> for Breakpoint {
    fn from((position, before, after): (f64, f64, f64)) -> Self {
        Breakpoint { position, before, after }
    }
}

/// Breakpoints of one channel, ordered by position.
pub type ChannelCurve = Vec<Breakpoint>;

/// A colormap definition in one of the two shapes found in segment
/// tables.
#[derive(Clone, Debug, PartialEq)]
pub enum ColormapDefinition {
    /// Three independent curves; they may have different lengths and
    /// positions.
    PerChannel {
        red: ChannelCurve,
        green: ChannelCurve,
        blue: ChannelCurve,
    },
    /// One list of `(position, color)` samples shared by the three
    /// channels.  It carries no discontinuity.
    Joint(Vec<(f64, RGB<f64>)>),
}

impl ColormapDefinition {
    /// Build a per-channel definition from `(position, before, after)`
    /// triples.
    pub fn per_channel(red: &[(f64, f64, f64)],
                       green: &[(f64, f64, f64)],
                       blue: &[(f64, f64, f64)]) -> Self {
        let curve = |c: &[(f64, f64, f64)]| -> ChannelCurve {
            c.iter().map(|&b| Breakpoint::from(b)).collect() };
        ColormapDefinition::PerChannel {
            red: curve(red),
            green: curve(green),
            blue: curve(blue),
        }
    }

    /// Build a joint definition from `(position, [r, g, b])` samples.
    pub fn joint(samples: &[(f64, [f64; 3])]) -> Self {
        ColormapDefinition::Joint(
            samples.iter()
                .map(|&(x, [r, g, b])| (x, RGB { r, g, b }))
                .collect())
    }

    /// Number of breakpoints per word this definition needs: the
    /// longest curve, or the number of samples.
    pub fn len(&self) -> usize {
        match self {
            ColormapDefinition::PerChannel { red, green, blue } =>
                red.len().max(green.len()).max(blue.len()),
            ColormapDefinition::Joint(samples) => samples.len(),
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Normalize the definition to one curve per channel, in the order
    /// of [`ColorChannel::ALL`].  Joint samples become continuous
    /// breakpoints sharing the same positions.
    pub fn channels(&self) -> [(ColorChannel, ChannelCurve); 3] {
        use ColorChannel::*;
        match self {
            ColormapDefinition::PerChannel { red, green, blue } => [
                (Red, red.clone()),
                (Green, green.clone()),
                (Blue, blue.clone()),
            ],
            ColormapDefinition::Joint(samples) => {
                let curve = |channel: ColorChannel| -> ChannelCurve {
                    samples.iter()
                        .map(|&(x, c)| {
                            let v = match channel {
                                Red => c.r, Green => c.g, Blue => c.b };
                            Breakpoint::flat(x, v) })
                        .collect()
                };
                [(Red, curve(Red)), (Green, curve(Green)), (Blue, curve(Blue))]
            }
        }
    }
}
