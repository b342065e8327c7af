// Segment data of the Matplotlib colormaps supported by the registry.
// Values from matplotlib/lib/matplotlib/_cm.py.

use lazy_static::lazy_static;
pub(crate) mod ty;
use ty::*;

lazy_static! {
  pub(crate) static ref CMRMAP: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0.000, 0.00, 0.00), (0.125, 0.15, 0.15), (0.250, 0.30, 0.30),
        (0.375, 0.60, 0.60), (0.500, 1.00, 1.00), (0.625, 0.90, 0.90),
        (0.750, 0.90, 0.90), (0.875, 0.90, 0.90), (1.000, 1.00, 1.00)],
      &[(0.000, 0.00, 0.00), (0.125, 0.15, 0.15), (0.250, 0.15, 0.15),
        (0.375, 0.20, 0.20), (0.500, 0.25, 0.25), (0.625, 0.50, 0.50),
        (0.750, 0.75, 0.75), (0.875, 0.90, 0.90), (1.000, 1.00, 1.00)],
      &[(0.000, 0.00, 0.00), (0.125, 0.50, 0.50), (0.250, 0.75, 0.75),
        (0.375, 0.50, 0.50), (0.500, 0.15, 0.15), (0.625, 0.00, 0.00),
        (0.750, 0.10, 0.10), (0.875, 0.50, 0.50), (1.000, 1.00, 1.00)]);

  pub(crate) static ref WISTIA: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0.0, 0.8941176470588236, 0.8941176470588236),
        (0.25, 1.0, 1.0), (0.5, 1.0, 1.0), (0.75, 1.0, 1.0),
        (1.0, 0.9882352941176471, 0.9882352941176471)],
      &[(0.0, 1.0, 1.0),
        (0.25, 0.9098039215686274, 0.9098039215686274),
        (0.5, 0.7411764705882353, 0.7411764705882353),
        (0.75, 0.6274509803921569, 0.6274509803921569),
        (1.0, 0.4980392156862745, 0.4980392156862745)],
      &[(0.0, 0.47843137254901963, 0.47843137254901963),
        (0.25, 0.10196078431372549, 0.10196078431372549),
        (0.5, 0.0, 0.0), (0.75, 0.0, 0.0), (1.0, 0.0, 0.0)]);

  pub(crate) static ref AUTUMN: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 1.0, 1.0), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (1.0, 0., 0.)]);

  pub(crate) static ref BINARY: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 1., 1.), (1., 0., 0.)],
      &[(0., 1., 1.), (1., 0., 0.)],
      &[(0., 1., 1.), (1., 0., 0.)]);

  pub(crate) static ref BONE: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0., 0.), (0.746032, 0.652778, 0.652778), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (0.365079, 0.319444, 0.319444),
        (0.746032, 0.777778, 0.777778), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (0.365079, 0.444444, 0.444444), (1.0, 1.0, 1.0)]);

  pub(crate) static ref COOL: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0., 0.), (1.0, 1.0, 1.0)],
      &[(0., 1., 1.), (1.0, 0., 0.)],
      &[(0., 1., 1.), (1.0, 1., 1.)]);

  pub(crate) static ref COPPER: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0., 0.), (0.809524, 1.000000, 1.000000), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (1.0, 0.7812, 0.7812)],
      &[(0., 0., 0.), (1.0, 0.4975, 0.4975)]);

  pub(crate) static ref GIST_RAINBOW: ColormapDefinition =
    ColormapDefinition::joint(&[
      (0.000, [1.00, 0.00, 0.16]),
      (0.030, [1.00, 0.00, 0.00]),
      (0.215, [1.00, 1.00, 0.00]),
      (0.400, [0.00, 1.00, 0.00]),
      (0.586, [0.00, 1.00, 1.00]),
      (0.770, [0.00, 0.00, 1.00]),
      (0.954, [1.00, 0.00, 1.00]),
      (1.000, [1.00, 0.00, 0.75])]);

  pub(crate) static ref GIST_STERN: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0.000, 0.000, 0.000), (0.0547, 1.000, 1.000),
        (0.250, 0.027, 0.250), (1.000, 1.000, 1.000)],
      &[(0., 0., 0.), (1., 1., 1.)],
      &[(0.000, 0.000, 0.000), (0.500, 1.000, 1.000),
        (0.735, 0.000, 0.000), (1.000, 1.000, 1.000)]);

  pub(crate) static ref GRAY: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0., 0.), (1., 1., 1.)],
      &[(0., 0., 0.), (1., 1., 1.)],
      &[(0., 0., 0.), (1., 1., 1.)]);

  pub(crate) static ref HOT: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0.0416, 0.0416), (0.365079, 1.000000, 1.000000),
        (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (0.365079, 0.000000, 0.000000),
        (0.746032, 1.000000, 1.000000), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (0.746032, 0.000000, 0.000000), (1.0, 1.0, 1.0)]);

  pub(crate) static ref HSV: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 1., 1.),
        (0.158730, 1.000000, 1.000000), (0.174603, 0.968750, 0.968750),
        (0.333333, 0.031250, 0.031250), (0.349206, 0.000000, 0.000000),
        (0.666667, 0.000000, 0.000000), (0.682540, 0.031250, 0.031250),
        (0.841270, 0.968750, 0.968750), (0.857143, 1.000000, 1.000000),
        (1.0, 1.0, 1.0)],
      &[(0., 0., 0.),
        (0.158730, 0.937500, 0.937500), (0.174603, 1.000000, 1.000000),
        (0.507937, 1.000000, 1.000000), (0.666667, 0.062500, 0.062500),
        (0.682540, 0.000000, 0.000000),
        (1.0, 0., 0.)],
      &[(0., 0., 0.),
        (0.333333, 0.000000, 0.000000), (0.349206, 0.062500, 0.062500),
        (0.507937, 1.000000, 1.000000), (0.841270, 1.000000, 1.000000),
        (0.857143, 0.937500, 0.937500),
        (1.0, 0.09375, 0.09375)]);

  pub(crate) static ref JET: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0.00, 0., 0.), (0.35, 0., 0.), (0.66, 1., 1.), (0.89, 1., 1.),
        (1.00, 0.5, 0.5)],
      &[(0.000, 0., 0.), (0.125, 0., 0.), (0.375, 1., 1.), (0.640, 1., 1.),
        (0.910, 0., 0.), (1.000, 0., 0.)],
      &[(0.00, 0.5, 0.5), (0.11, 1., 1.), (0.34, 1., 1.), (0.65, 0., 0.),
        (1.00, 0., 0.)]);

  pub(crate) static ref SPRING: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 1., 1.), (1.0, 1.0, 1.0)],
      &[(0., 0., 0.), (1.0, 1.0, 1.0)],
      &[(0., 1., 1.), (1.0, 0.0, 0.0)]);

  pub(crate) static ref SUMMER: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0., 0.), (1.0, 1.0, 1.0)],
      &[(0., 0.5, 0.5), (1.0, 1.0, 1.0)],
      &[(0., 0.4, 0.4), (1.0, 0.4, 0.4)]);

  pub(crate) static ref TERRAIN: ColormapDefinition =
    ColormapDefinition::joint(&[
      (0.00, [0.2, 0.2, 0.6]),
      (0.15, [0.0, 0.6, 1.0]),
      (0.25, [0.0, 0.8, 0.4]),
      (0.50, [1.0, 1.0, 0.6]),
      (0.75, [0.5, 0.36, 0.33]),
      (1.00, [1.0, 1.0, 1.0])]);

  pub(crate) static ref WINTER: ColormapDefinition =
    ColormapDefinition::per_channel(
      &[(0., 0., 0.), (1.0, 0.0, 0.0)],
      &[(0., 0., 0.), (1.0, 1.0, 1.0)],
      &[(0., 1., 1.), (1.0, 0.5, 0.5)]);
}

lazy_static! {
  pub(crate) static ref ALL_COLORMAPS:
  [(&'static str, &'static ColormapDefinition); 17] = [
    ("CMRmap", &*CMRMAP),
    ("Wistia", &*WISTIA),
    ("autumn", &*AUTUMN),
    ("binary", &*BINARY),
    ("bone", &*BONE),
    ("cool", &*COOL),
    ("copper", &*COPPER),
    ("gist_rainbow", &*GIST_RAINBOW),
    ("gist_stern", &*GIST_STERN),
    ("gray", &*GRAY),
    ("hot", &*HOT),
    ("hsv", &*HSV),
    ("jet", &*JET),
    ("spring", &*SPRING),
    ("summer", &*SUMMER),
    ("terrain", &*TERRAIN),
    ("winter", &*WINTER),
  ];
}
