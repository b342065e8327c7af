//! Pack piecewise-linear colormaps into 256-bit words.
//!
//! A colormap is given by a [`ColormapDefinition`], either as three
//! independent channel curves or as one list of RGB samples.  Each
//! channel is packed into a single [`PackedWord`] holding up to
//! [`CAPACITY`] breakpoints of 24 bits (position, value before, value
//! after, one byte each) so that an on-chain registry can decode it
//! with fixed shifts and masks.
//!
//! - [`encode`] / [`Encoder`] pack one colormap into a [`SegmentData`].
//! - [`process_all`] packs a whole table, skipping the colormaps that
//!   do not fit.
//! - [`format()`] renders the packed words as the registry's
//!   registration payload.
//! - [`SegmentData::gradient`] evaluates the packed colormap the way
//!   the registry does (see [`ColorRange`]).
//!
//! The Matplotlib colormaps accepted by the registry are available
//! through [`colormaps`].

use log::{debug, warn};
use rgb::{RGBA, RGB8, RGBA8};
use thiserror::Error;

mod palettes;
mod word;
pub mod format;

pub use palettes::ty::{Breakpoint, ChannelCurve, ColorChannel,
                       ColormapDefinition};
pub use word::{decode, quantize, PackedWord, QuantizedBreakpoint,
               CAPACITY, SLOT_BITS};
pub use format::{format, write_payload, FormatOptions};

/// Return the built-in colormaps, in registration order.
///
/// # Example
///
/// ```
/// let names: Vec<_> = colormap_segments::colormaps()
///     .map(|(name, _)| name).collect();
/// assert_eq!(names[0], "CMRmap");
/// assert!(names.contains(&"terrain"));
/// ```
pub fn colormaps()
    -> impl Iterator<Item = (&'static str, &'static ColormapDefinition)> {
    palettes::ALL_COLORMAPS.iter().copied()
}

/// Return the built-in colormap called `name`, if any.
pub fn colormap(name: &str) -> Option<&'static ColormapDefinition> {
    colormaps().find(|(n, _)| *n == name).map(|(_, d)| d)
}

/// Reasons for a colormap not to be packed.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodingError {
    #[error("colormap “{name}”{}: {count} breakpoints exceed the word \
             capacity of {}", on_channel(.channel), CAPACITY)]
    CapacityExceeded {
        name: String,
        /// `None` when the samples of a joint definition overflow.
        channel: Option<ColorChannel>,
        count: usize,
    },

    #[error("colormap “{name}”, {channel} breakpoint {index}: {reason}")]
    MalformedInput {
        name: String,
        channel: ColorChannel,
        index: usize,
        reason: String,
    },
}

fn on_channel(channel: &Option<ColorChannel>) -> String {
    channel.map_or(String::new(), |c| format!(" ({c} channel)"))
}

impl EncodingError {
    /// Name of the colormap that failed.
    pub fn name(&self) -> &str {
        match self {
            EncodingError::CapacityExceeded { name, .. }
            | EncodingError::MalformedInput { name, .. } => name,
        }
    }
}

/// The packed words of a colormap, one per channel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SegmentData {
    /// Name of the colormap (not encoded).
    pub name: String,
    pub r: PackedWord,
    pub g: PackedWord,
    pub b: PackedWord,
}

impl SegmentData {
    /// Returns the word of `channel`.
    pub fn word(&self, channel: ColorChannel) -> &PackedWord {
        match channel {
            ColorChannel::Red => &self.r,
            ColorChannel::Green => &self.g,
            ColorChannel::Blue => &self.b,
        }
    }

    /// Return the breakpoints stored for `channel`.  A word does not
    /// record its length: trailing all-zero slots are dropped, keeping
    /// at least one breakpoint.
    pub fn decode(&self, channel: ColorChannel) -> Vec<QuantizedBreakpoint> {
        let word = self.word(channel);
        decode(word, word.used_slots().max(1))
    }

    /// Returns the colormap as read back from the packed words.
    ///
    /// # Example
    ///
    /// ```
    /// use rgb::RGB8;
    /// use colormap_segments::{encode, colormap, ColorRange};
    /// let gray = encode("gray", colormap("gray").unwrap()).unwrap();
    /// let g = gray.gradient();
    /// assert_eq!(ColorRange::<RGB8>::rgb(&g, 0.), RGB8::new(0, 0, 0));
    /// assert_eq!(ColorRange::<RGB8>::rgb(&g, 1.), RGB8::new(255, 255, 255));
    /// ```
    pub fn gradient(&self) -> SegmentGradient {
        SegmentGradient { r: self.decode(ColorChannel::Red),
                          g: self.decode(ColorChannel::Green),
                          b: self.decode(ColorChannel::Blue) }
    }
}

/// Configurable colormap encoder.
///
/// By default the input is trusted: only the capacity is checked.
/// With [`Encoder::strict`], values outside \[0, 1\] and decreasing
/// positions are rejected with [`EncodingError::MalformedInput`]
/// instead of producing a meaningless word.
#[derive(Clone, Debug, Default)]
pub struct Encoder {
    strict: bool,
}

/// The outcome of packing a table of colormaps.
#[derive(Clone, Debug, Default)]
pub struct Batch {
    /// Packed colormaps, in table order.
    pub encoded: Vec<SegmentData>,
    /// Colormaps left out, in table order.
    pub skipped: Vec<EncodingError>,
}

impl Encoder {
    pub fn new() -> Self { Self::default() }

    /// Validate the breakpoints before packing them.
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Pack the three channels of `def`.
    pub fn encode(&self, name: &str, def: &ColormapDefinition)
                  -> Result<SegmentData, EncodingError> {
        let capacity = |channel, count| EncodingError::CapacityExceeded {
            name: name.to_string(), channel, count };
        if let ColormapDefinition::Joint(samples) = def {
            if samples.len() > CAPACITY {
                return Err(capacity(None, samples.len()))
            }
        }
        let channels = def.channels();
        for (channel, curve) in &channels {
            if curve.len() > CAPACITY {
                return Err(capacity(Some(*channel), curve.len()))
            }
        }
        let mut words = [PackedWord::ZERO; 3];
        for (i, (channel, curve)) in channels.iter().enumerate() {
            if self.strict { validate(name, *channel, curve)? }
            words[i] = PackedWord::pack(curve)
                .ok_or_else(|| capacity(Some(*channel), curve.len()))?;
        }
        let [r, g, b] = words;
        Ok(SegmentData { name: name.to_string(), r, g, b })
    }

    /// Pack every colormap of `table`.  A colormap that cannot be
    /// packed is left out (and reported in [`Batch::skipped`]); the
    /// others are unaffected.
    pub fn process_all<'a, I>(&self, table: I) -> Batch
    where I: IntoIterator<Item = (&'a str, &'a ColormapDefinition)> {
        table.into_iter().fold(Batch::default(), |mut batch, (name, def)| {
            match self.encode(name, def) {
                Ok(seg) => {
                    debug!("packed colormap “{name}” ({} breakpoints)",
                           def.len());
                    batch.encoded.push(seg)
                }
                Err(e) => {
                    warn!("skipping {e}");
                    batch.skipped.push(e)
                }
            }
            batch
        })
    }
}

fn validate(name: &str, channel: ColorChannel, curve: &[Breakpoint])
            -> Result<(), EncodingError> {
    let malformed = |index, reason| EncodingError::MalformedInput {
        name: name.to_string(), channel, index, reason };
    let mut prev = 0.;
    for (index, bp) in curve.iter().enumerate() {
        for (what, v) in [("position", bp.position),
                          ("value before", bp.before),
                          ("value after", bp.after)] {
            if !(0. ..= 1.).contains(&v) {
                return Err(malformed(index,
                                     format!("{what} {v} not in [0, 1]")))
            }
        }
        if bp.position < prev {
            return Err(malformed(index, format!(
                "position {} smaller than the previous one ({prev})",
                bp.position)))
        }
        prev = bp.position;
    }
    Ok(())
}

/// Pack the colormap `def` called `name`, trusting its values.
///
/// # Example
///
/// ```
/// use colormap_segments::{encode, ColormapDefinition};
/// let binary = ColormapDefinition::per_channel(
///     &[(0., 1., 1.), (1., 0., 0.)],
///     &[(0., 1., 1.), (1., 0., 0.)],
///     &[(0., 1., 1.), (1., 0., 0.)]);
/// let seg = encode("binary", &binary).unwrap();
/// assert_eq!(format!("{:X}", seg.r), "FF000000FFFF");
/// ```
pub fn encode(name: &str, def: &ColormapDefinition)
              -> Result<SegmentData, EncodingError> {
    Encoder::new().encode(name, def)
}

/// Pack every colormap of `table` with the default [`Encoder`].
pub fn process_all<'a, I>(table: I) -> Batch
where I: IntoIterator<Item = (&'a str, &'a ColormapDefinition)> {
    Encoder::new().process_all(table)
}


/// Specifies the methods a RGB color encoding must provide.
pub trait RGBColor: Sized {
    /// Return the red, green, blue and alpha components of the color
    /// (in \[0, 255\]).
    fn to_rgba(&self) -> RGBA<f64>;

    /// Create a color from its RGBA components (in \[0, 255\]).
    fn from_rgba(rgba: RGBA<f64>) -> Self;
}

impl RGBColor for RGBA<f64> {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> { *self }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self { c }
}

impl RGBColor for RGB8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64, a: 255. }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGB8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8 }
    }
}

impl RGBColor for RGBA8 {
    #[inline]
    fn to_rgba(&self) -> RGBA<f64> {
        RGBA{ r: self.r as f64, g: self.g as f64, b: self.b as f64,
              a: self.a as f64 }
    }

    #[inline]
    fn from_rgba(c: RGBA<f64>) -> Self {
        RGBA8 { r: c.r as u8,  g: c.g as u8,  b: c.b as u8, a: c.a as u8 }
    }
}

/// A “continuous” range of colors parametrized by reals in \[0, 1\].
pub trait ColorRange<Color> {
    /// Returns the color corresponding to `t` ∈ \[0., 1.\].
    fn rgb(&self, t: f64) -> Color;

    /// Returns `n` colors uniformly sampled on \[0, 1\], bounds
    /// included.
    fn samples(&self, n: usize) -> Vec<Color> {
        match n {
            0 => vec![],
            1 => vec![self.rgb(0.)],
            _ => {
                let dt = 1. / (n - 1) as f64;
                (0 .. n).map(|i| self.rgb(i as f64 * dt)).collect()
            }
        }
    }
}

/// A colormap decoded from its [`SegmentData`].
///
/// Created by [`SegmentData::gradient`].  Each channel is linearly
/// interpolated between its quantized breakpoints, leaving a
/// breakpoint with its “after” value and reaching the next one with
/// its “before” value.
#[derive(Clone, Debug)]
pub struct SegmentGradient {
    r: Vec<QuantizedBreakpoint>,
    g: Vec<QuantizedBreakpoint>,
    b: Vec<QuantizedBreakpoint>,
}

/// Value in \[0, 255\] of the channel given by `curve` at `t`.
fn channel_value(curve: &[QuantizedBreakpoint], t: f64) -> f64 {
    match curve.iter().position(|bp| bp.x() > t) {
        None => curve.last().map_or(0., |bp| bp.before as f64),
        Some(0) => curve[0].after as f64,
        Some(k) => {
            let (b0, b1) = (curve[k - 1], curve[k]);
            let s = (t - b0.x()) / (b1.x() - b0.x());
            b0.after as f64 + s * (b1.before as f64 - b0.after as f64)
        }
    }
}

impl<Color> ColorRange<Color> for SegmentGradient
where Color: RGBColor {
    fn rgb(&self, t: f64) -> Color {
        let t = t.clamp(0., 1.);
        Color::from_rgba(RGBA { r: channel_value(&self.r, t),
                                g: channel_value(&self.g, t),
                                b: channel_value(&self.b, t),
                                a: 255. })
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn bp(x: f64, y0: f64, y1: f64) -> Breakpoint { Breakpoint::new(x, y0, y1) }

    fn ramp(n: usize) -> ChannelCurve {
        (0 .. n).map(|i| {
            let x = i as f64 / (n - 1) as f64;
            bp(x, x, x) })
            .collect()
    }

    fn per_channel(red: ChannelCurve) -> ColormapDefinition {
        ColormapDefinition::PerChannel {
            red, green: ramp(2), blue: ramp(2) }
    }

    #[test]
    fn per_channel_scenario() {
        let seg = encode("binary", colormap("binary").unwrap()).unwrap();
        let expected = PackedWord::from((0xFF0000_u128 << 24) | 0x00FFFF);
        assert_eq!(seg.r, expected);
        assert_eq!(seg.g, expected);
        assert_eq!(seg.b, expected);
        assert_eq!(seg.name, "binary");
    }

    #[test]
    fn joint_first_sample() {
        let def = ColormapDefinition::joint(&[(0.0, [0.2, 0.2, 0.6])]);
        let seg = encode("terrain", &def).unwrap();
        assert_eq!(seg.r, PackedWord::from(0x003333_u128));
        assert_eq!(seg.g, PackedWord::from(0x003333_u128));
        assert_eq!(seg.b, PackedWord::from(0x009999_u128));
    }

    #[test]
    fn joint_channels_get_their_own_words() {
        let seg = encode("terrain", colormap("terrain").unwrap()).unwrap();
        assert_ne!(seg.g, seg.b);
        let blue: Vec<_> = seg.decode(ColorChannel::Blue).iter()
            .map(|q| q.after).collect();
        assert_eq!(blue, [153, 255, 102, 153, 84, 255]);
        // Positions are shared by the three channels.
        for j in 0 .. 6 {
            let x = seg.r.slot(j) >> 16;
            assert_eq!(seg.g.slot(j) >> 16, x);
            assert_eq!(seg.b.slot(j) >> 16, x);
        }
    }

    #[test]
    fn capacity_boundary() {
        assert!(encode("ten", &per_channel(ramp(10))).is_ok());
        let err = encode("eleven", &per_channel(ramp(11))).unwrap_err();
        assert_eq!(err, EncodingError::CapacityExceeded {
            name: "eleven".to_string(),
            channel: Some(ColorChannel::Red),
            count: 11 });
        assert_eq!(err.name(), "eleven");

        let samples: Vec<_> = (0 .. 11)
            .map(|i| (i as f64 / 10., [0.5; 3])).collect();
        let err = encode("joint", &ColormapDefinition::joint(&samples))
            .unwrap_err();
        assert!(matches!(err, EncodingError::CapacityExceeded {
            channel: None, count: 11, .. }));
    }

    #[test]
    fn overflowing_colormap_is_skipped() {
        let too_long = per_channel(ramp(11));
        let table = [("gray", colormap("gray").unwrap()),
                     ("long", &too_long),
                     ("jet", colormap("jet").unwrap())];
        let batch = process_all(table);
        let names: Vec<_> = batch.encoded.iter().map(|s| &s.name[..])
            .collect();
        assert_eq!(names, ["gray", "jet"]);
        assert_eq!(batch.skipped.len(), 1);
        assert_eq!(batch.skipped[0].name(), "long");
    }

    #[test]
    fn independent_and_idempotent() {
        let jet = colormap("jet").unwrap();
        let hot = colormap("hot").unwrap();
        let a = process_all([("jet", jet), ("hot", hot)]);
        let b = process_all([("hot", hot), ("jet", jet)]);
        assert_eq!(a.encoded[0], b.encoded[1]);
        assert_eq!(a.encoded[1], b.encoded[0]);
        assert_eq!(encode("jet", jet), encode("jet", jet));
    }

    #[test]
    fn builtin_table_fits() {
        let batch = process_all(colormaps());
        assert!(batch.skipped.is_empty());
        assert_eq!(batch.encoded.len(), 17);
        let hsv = colormap("hsv").unwrap();
        assert_eq!(hsv.len(), CAPACITY);
    }

    #[test]
    fn round_trip() {
        for (name, def) in colormaps() {
            let seg = encode(name, def).unwrap();
            for (channel, curve) in def.channels() {
                let q = decode(seg.word(channel), curve.len());
                for (bp, q) in curve.iter().zip(&q) {
                    assert!((bp.position - q.x()).abs() < 1. / 255.,
                            "{name} {channel}: {bp:?} ≉ {q:?}");
                    assert!((bp.before - q.before as f64 / 255.).abs()
                            < 1. / 255.);
                    assert!((bp.after - q.after as f64 / 255.).abs()
                            < 1. / 255.);
                }
            }
        }
    }

    #[test]
    fn strict_mode() {
        let enc = Encoder::new().strict(true);
        assert!(enc.encode("hsv", colormap("hsv").unwrap()).is_ok());

        let out_of_range = per_channel(vec![bp(0., 0., 1.2), bp(1., 1., 1.)]);
        assert!(encode("loose", &out_of_range).is_ok());
        match enc.encode("loose", &out_of_range) {
            Err(EncodingError::MalformedInput { channel, index, .. }) => {
                assert_eq!(channel, ColorChannel::Red);
                assert_eq!(index, 0);
            }
            r => panic!("unexpected {r:?}"),
        }

        let unordered = per_channel(vec![bp(0., 0., 0.), bp(0.7, 1., 1.),
                                         bp(0.3, 0., 0.), bp(1., 1., 1.)]);
        let err = enc.encode("unordered", &unordered).unwrap_err();
        assert!(matches!(err, EncodingError::MalformedInput {
            index: 2, .. }));

        let nan = per_channel(vec![bp(0., f64::NAN, 0.), bp(1., 1., 1.)]);
        assert!(enc.encode("nan", &nan).is_err());
    }

    #[test]
    fn strict_checks_capacity_first() {
        let mut long = ramp(11);
        long[3].before = 7.;
        let err = Encoder::new().strict(true)
            .encode("long", &per_channel(long)).unwrap_err();
        assert!(matches!(err, EncodingError::CapacityExceeded { .. }));
    }

    #[test]
    fn error_messages() {
        let err = EncodingError::CapacityExceeded {
            name: "jet".to_string(), channel: Some(ColorChannel::Green),
            count: 12 };
        assert_eq!(err.to_string(),
                   "colormap “jet” (green channel): 12 breakpoints exceed \
                    the word capacity of 10");
    }

    #[test]
    fn gradient_interpolates() {
        let seg = encode("jet", colormap("jet").unwrap()).unwrap();
        let g = seg.gradient();
        let c: RGB8 = g.rgb(0.);
        assert_eq!(c, RGB8::new(0, 0, 127));
        let c: RGB8 = g.rgb(1.);
        assert_eq!(c, RGB8::new(127, 0, 0));
        let c: RGB8 = g.rgb(-3.);
        assert_eq!(c, RGB8::new(0, 0, 127));
        let colors: Vec<RGB8> = g.samples(5);
        assert_eq!(colors.len(), 5);
        assert_eq!(colors[4], RGB8::new(127, 0, 0));
    }

    #[test]
    fn gradient_discontinuity() {
        // gist_stern red jumps from 0.027 to 0.250 at x = 0.25.
        let seg = encode("gist_stern", colormap("gist_stern").unwrap())
            .unwrap();
        let g = seg.gradient();
        let x = 63. / 255.;
        let c: RGBA<f64> = g.rgb(x);
        assert_eq!(c.r, 63.);
        let c: RGBA<f64> = g.rgb(x - 1e-9);
        assert!((c.r - 6.).abs() < 1e-3);
    }
}
