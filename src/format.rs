//! Registration payload for the on-chain colormap registry.
//!
//! The payload allocates one `SegmentData` struct per packed colormap,
//! assigns its three words and hands the array to the registry's batch
//! registration function:
//!
//! ```text
//! IColormapRegistry.SegmentData[] memory segmentDataArray = new IColormapRegistry.SegmentData[](1);
//!
//! // ``gray'' colormap.
//! segmentDataArray[0].r = 0xFFFFFF000000;
//! segmentDataArray[0].g = 0xFFFFFF000000;
//! segmentDataArray[0].b = 0xFFFFFF000000;
//!
//! colormapRegistry.batchRegister(segmentDataArray);
//! ```

use std::fmt::{self, Write};
use crate::{ColorChannel, SegmentData};

/// Names used in the generated statements.
#[derive(Clone, Debug)]
pub struct FormatOptions {
    /// Type of an array element.
    pub element_type: String,
    /// Name of the local array variable.
    pub array: String,
    /// Expression designating the registry contract.
    pub registry: String,
    /// Registry function registering an array of segment data.
    pub register: String,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            element_type: "IColormapRegistry.SegmentData".to_string(),
            array: "segmentDataArray".to_string(),
            registry: "colormapRegistry".to_string(),
            register: "batchRegister".to_string(),
        }
    }
}

/// Write the payload registering `encoded` to `fh`.  Array slots are
/// numbered in the order of `encoded`.
pub fn write_payload(fh: &mut impl Write, encoded: &[SegmentData],
                     opt: &FormatOptions) -> fmt::Result {
    let FormatOptions { element_type: ty, array, registry, register } = opt;
    writeln!(fh, "{ty}[] memory {array} = new {ty}[]({});", encoded.len())?;
    for (i, seg) in encoded.iter().enumerate() {
        writeln!(fh, "\n// ``{}'' colormap.", seg.name)?;
        for channel in ColorChannel::ALL {
            writeln!(fh, "{array}[{i}].{} = 0x{:X};",
                     channel.field(), seg.word(channel))?;
        }
    }
    writeln!(fh, "\n{registry}.{register}({array});")
}

/// Return the payload registering `encoded`, with the default
/// [`FormatOptions`].
pub fn format(encoded: &[SegmentData]) -> String {
    let mut payload = String::new();
    // Writing to a `String` does not fail.
    let _ = write_payload(&mut payload, encoded, &FormatOptions::default());
    payload
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::{colormap, colormaps, process_all, ColormapDefinition};

    #[test]
    fn gray() {
        let batch = process_all([("gray", colormap("gray").unwrap())]);
        assert_eq!(format(&batch.encoded),
                   "IColormapRegistry.SegmentData[] memory segmentDataArray \
                    = new IColormapRegistry.SegmentData[](1);\n\
                    \n\
                    // ``gray'' colormap.\n\
                    segmentDataArray[0].r = 0xFFFFFF000000;\n\
                    segmentDataArray[0].g = 0xFFFFFF000000;\n\
                    segmentDataArray[0].b = 0xFFFFFF000000;\n\
                    \n\
                    colormapRegistry.batchRegister(segmentDataArray);\n");
    }

    #[test]
    fn empty() {
        assert_eq!(format(&[]),
                   "IColormapRegistry.SegmentData[] memory segmentDataArray \
                    = new IColormapRegistry.SegmentData[](0);\n\
                    \n\
                    colormapRegistry.batchRegister(segmentDataArray);\n");
    }

    #[test]
    fn skipped_colormaps_leave_no_gap() {
        let ramp: Vec<_> = (0 .. 11)
            .map(|i| (i as f64 / 10., [i as f64 / 10.; 3])).collect();
        let too_long = ColormapDefinition::joint(&ramp);
        let table = [("autumn", colormap("autumn").unwrap()),
                     ("ramp", &too_long),
                     ("winter", colormap("winter").unwrap())];
        let payload = format(&process_all(table).encoded);
        assert!(payload.contains("SegmentData[](2);"));
        assert!(!payload.contains("ramp"));
        let autumn = payload.find("``autumn''").unwrap();
        let winter = payload.find("``winter''").unwrap();
        assert!(autumn < winter);
        assert!(payload.contains("segmentDataArray[1].b = "));
        assert!(!payload.contains("segmentDataArray[2]"));
    }

    #[test]
    fn one_assignment_per_channel() {
        let batch = process_all(colormaps());
        let payload = format(&batch.encoded);
        let n = batch.encoded.len();
        assert!(payload.contains(&format!("SegmentData[]({n});")));
        for field in ["r", "g", "b"] {
            let count = payload.matches(&format!("].{field} = 0x")).count();
            assert_eq!(count, n);
        }
    }

    #[test]
    fn custom_names() {
        let batch = process_all([("cool", colormap("cool").unwrap())]);
        let opt = FormatOptions { registry: "registry".to_string(),
                                  register: "register".to_string(),
                                  ..FormatOptions::default() };
        let mut payload = String::new();
        write_payload(&mut payload, &batch.encoded, &opt).unwrap();
        assert!(payload.ends_with("\nregistry.register(segmentDataArray);\n"));
        // cool green: (0, 1, 1), (1, 0, 0)
        assert!(payload.contains("segmentDataArray[0].g = 0xFF000000FFFF;"));
    }
}
