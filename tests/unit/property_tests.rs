/*!
 * Property tests for the shift and naming laws
 */

use proptest::prelude::*;
use submod::naming::output_file_name;
use submod::time_range::{transform_time_range_line, RenderedLine};
use submod::timecode::{Offset, Shifted, Timecode};

// Keep values below 100 hours so they fit the two-digit hour field
const MAX_MS: u64 = 100 * 3_600_000;

proptest! {
    #[test]
    fn test_shift_roundTrip_shouldRecoverTimestamp(t in 0..MAX_MS, r in 0..MAX_MS) {
        let offset = Offset::from_millis(r as i64 - t as i64);
        let start = Timecode::from_millis(t);

        let shifted = match start.shift(offset) {
            Shifted::Kept(tc) => tc,
            Shifted::Deleted => panic!("non-negative result was deleted"),
        };
        prop_assert_eq!(shifted.millis(), r);

        // Through the text form as well
        let reparsed: Timecode = shifted.to_string().parse().unwrap();
        prop_assert_eq!(reparsed.shift(-offset), Shifted::Kept(start));
    }

    #[test]
    fn test_shift_belowZero_shouldAlwaysDelete(t in 0..MAX_MS, d in 1i64..10_000_000) {
        let offset = Offset::from_millis(-(t as i64) - d);
        prop_assert_eq!(Timecode::from_millis(t).shift(offset), Shifted::Deleted);
    }

    #[test]
    fn test_transform_withValidRange_shouldNeverProduceEndBeforeStart(
        start in 0..MAX_MS / 4,
        len in 0..MAX_MS / 4,
        s in -(MAX_MS as i64)..(MAX_MS as i64) / 4,
    ) {
        let line = format!(
            "{} --> {}\n",
            Timecode::from_millis(start),
            Timecode::from_millis(start + len)
        );

        match transform_time_range_line(&line, Offset::from_millis(s)).unwrap() {
            RenderedLine::Shifted(text) | RenderedLine::ForcedStart(text) => {
                let start: Timecode = text[0..12].parse().unwrap();
                let end: Timecode = text[17..29].parse().unwrap();
                prop_assert!(start <= end);
            }
            RenderedLine::Deleted => prop_assert!(start as i64 + len as i64 + s < 0),
        }
    }

    #[test]
    fn test_outputFileName_twoRuns_shouldEqualOneCombinedRun(
        c1 in -1_000_000i64..1_000_000,
        c2 in -1_000_000i64..1_000_000,
    ) {
        // Offsets in whole hundredths, as they appear in tags
        let s1 = Offset::from_millis(c1 * 10);
        let s2 = Offset::from_millis(c2 * 10);

        let twice = output_file_name(&output_file_name("movie.srt", s1), s2);
        let once = output_file_name("movie.srt", s1 + s2);
        prop_assert_eq!(twice, once);
    }
}
