// Print the payload registering colormaps with the on-chain registry.
//
//     colormap-segments-tools [--strict] [FILE.hjson]
//
// Without FILE, the colormaps built into the library are used.
// Otherwise FILE maps colormap names either to per-channel segment
// data, as in Matplotlib's _cm.py,
//
//     gray: { red: [[0, 0, 0], [1, 1, 1]], green: ..., blue: ... }
//
// or to a list of (position, color) samples
//
//     terrain: [[0.0, [0.2, 0.2, 0.6]], [0.15, [0.0, 0.6, 1.0]], ...]
//
// Colormaps that cannot be packed are reported on stderr (set RUST_LOG
// to change the verbosity) and left out of the payload.

use std::{env,
          fs::File,
          io::{self, BufWriter, prelude::*},
          error::Error};
use log::info;
use serde_hjson::Value;
use colormap_segments::{colormaps, format, Breakpoint, ChannelCurve,
                        ColormapDefinition, Encoder};

type Err = Box<dyn Error>;

fn number(v: &Value) -> Option<f64> {
    match *v {
        Value::I64(i) => Some(i as f64),
        Value::U64(u) => Some(u as f64),
        Value::F64(x) => Some(x),
        _ => None,
    }
}

/// Read a list of three numbers.
fn triple(name: &str, v: &Value) -> Result<[f64; 3], Err> {
    if let Value::Array(a) = v {
        if let [a, b, c] = &a[..] {
            if let (Some(a), Some(b), Some(c)) = (number(a), number(b), number(c)) {
                return Ok([a, b, c])
            }
        }
    }
    Err(format!("colormap-segments-tools: {name}: {v:?} is not a list \
                 of 3 numbers").into())
}

fn curve(name: &str, v: Option<&Value>) -> Result<ChannelCurve, Err> {
    match v {
        Some(Value::Array(bps)) => bps.iter()
            .map(|bp| -> Result<Breakpoint, Err> {
                let [x, y0, y1] = triple(name, bp)?;
                Ok(Breakpoint::new(x, y0, y1)) })
            .collect(),
        _ => Err(format!("colormap-segments-tools: {name}: missing channel \
                          in {v:?}").into()),
    }
}

fn definition(name: &str, v: &Value) -> Result<ColormapDefinition, Err> {
    match v {
        Value::Object(m) => Ok(ColormapDefinition::PerChannel {
            red: curve(name, m.get("red"))?,
            green: curve(name, m.get("green"))?,
            blue: curve(name, m.get("blue"))?,
        }),
        Value::Array(samples) => {
            let samples = samples.iter()
                .map(|s| -> Result<(f64, [f64; 3]), Err> { match s {
                    Value::Array(s) if s.len() == 2 => {
                        let x = number(&s[0]).ok_or_else(|| -> Err {
                            format!("colormap-segments-tools: {name}: \
                                     {:?} is not a position", s[0]).into()
                        })?;
                        Ok((x, triple(name, &s[1])?))
                    }
                    _ => Err(format!("colormap-segments-tools: {name}: \
                                      {s:?} is not a (position, color) \
                                      sample").into()),
                } })
                .collect::<Result<Vec<_>, Err>>()?;
            Ok(ColormapDefinition::joint(&samples))
        }
        _ => Err(format!("colormap-segments-tools: {name}: not a colormap \
                          definition").into()),
    }
}

fn colormaps_from_json(json: Value)
                       -> Result<Vec<(String, ColormapDefinition)>, Err> {
    match json {
        Value::Object(m) => m.into_iter()
            .map(|(name, v)| -> Result<(String, ColormapDefinition), Err> {
                let def = definition(&name, &v)?;
                Ok((name, def)) })
            .collect(),
        _ => Err("colormap-segments-tools: the file must contain an object \
                  mapping names to colormaps".into()),
    }
}

fn main() -> Result<(), Err> {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("warn")).init();

    let mut strict = false;
    let mut path = None;
    for arg in env::args().skip(1) {
        if arg == "--strict" { strict = true }
        else { path = Some(arg) }
    }
    let encoder = Encoder::new().strict(strict);

    let batch = match path {
        Some(path) => {
            let fh = File::open(&path)?;
            let json: Value = serde_hjson::from_reader(fh)?;
            let table = colormaps_from_json(json)?;
            info!("{}: {} colormaps", path, table.len());
            encoder.process_all(table.iter().map(|(n, d)| (n.as_str(), d)))
        }
        None => encoder.process_all(colormaps()),
    };
    info!("{} colormaps packed, {} skipped",
          batch.encoded.len(), batch.skipped.len());

    let mut fh = BufWriter::new(io::stdout().lock());
    write!(fh, "{}", format(&batch.encoded))?;
    fh.flush()?;
    Ok(())
}
