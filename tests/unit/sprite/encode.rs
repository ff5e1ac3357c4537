use super::*;

const T: Rgba8 = Rgba8::new(9, 9, 9, 0);
const S: Rgba8 = Rgba8::new(255, 0, 0, 255);
const H: Rgba8 = Rgba8::new(100, 100, 100, 128);

fn grid(width: usize, height: usize, px: &[Rgba8]) -> SampleGrid {
    SampleGrid::new(width, height, px.to_vec()).unwrap()
}

fn arrays(runs: &[RunSpan]) -> Vec<[usize; 5]> {
    runs.iter().map(|r| r.to_array()).collect()
}

#[test]
fn solid_then_transparent_pixel() {
    let out = encode(&grid(2, 1, &[S, Rgba8::transparent()]));
    assert_eq!(out.data, vec![255, 0, 0, 255, 0, 0, 0, 0]);
    assert_eq!(arrays(&out.solid_runs), vec![[0, 0, 4, 0, 4]]);
    assert!(out.translucent_runs.is_empty());
}

#[test]
fn single_translucent_pixel_is_premultiplied() {
    let out = encode(&grid(1, 1, &[H]));
    assert_eq!(out.data, vec![50, 50, 50, 128]);
    assert_eq!(arrays(&out.translucent_runs), vec![[0, 0, 4, 0, 4]]);
    assert!(out.solid_runs.is_empty());
}

#[test]
fn single_solid_pixel_closes_on_sentinel() {
    let out = encode(&grid(1, 1, &[S]));
    assert_eq!(arrays(&out.solid_runs), vec![[0, 0, 4, 0, 4]]);
}

#[test]
fn all_transparent_yields_zeroed_buffer_and_empty_lists() {
    let out = encode(&grid(3, 2, &[T; 6]));
    assert_eq!(out.data, vec![0u8; 24]);
    assert!(out.translucent_runs.is_empty());
    assert!(out.solid_runs.is_empty());
}

#[test]
fn mixed_row_interleaves_runs_into_separate_lists() {
    // S S H T H S | sentinel
    let out = encode(&grid(6, 1, &[S, S, H, T, H, S]));
    assert_eq!(arrays(&out.solid_runs), vec![[0, 0, 8, 0, 8], [0, 20, 24, 20, 24]]);
    assert_eq!(
        arrays(&out.translucent_runs),
        vec![[0, 8, 12, 8, 12], [0, 16, 20, 16, 20]]
    );
}

#[test]
fn runs_reset_per_row_and_carry_absolute_offsets() {
    // Row 0: T S S ; Row 1: S S T
    let out = encode(&grid(3, 2, &[T, S, S, S, S, T]));
    assert_eq!(
        arrays(&out.solid_runs),
        vec![[0, 4, 12, 4, 12], [1, 12, 20, 0, 8]]
    );
}

#[test]
fn full_rows_produce_one_run_each() {
    let out = encode(&grid(4, 3, &[H; 12]));
    assert_eq!(out.translucent_runs.len(), 3);
    for (y, run) in out.translucent_runs.iter().enumerate() {
        assert_eq!(run.to_array(), [y, y * 16, y * 16 + 16, 0, 16]);
    }
}

#[test]
fn parallel_matches_sequential() {
    let g = SampleGrid::from_fn(17, 9, |x, y| {
        let a = match (x * 7 + y * 3) % 5 {
            0 => 0,
            1 | 2 => 255,
            _ => ((x * 31 + y * 11) % 254 + 1) as u8,
        };
        Rgba8::new((x * 13) as u8, (y * 29) as u8, (x ^ y) as u8, a)
    })
    .unwrap();

    let seq = encode(&g);
    let par = encode_with(
        &g,
        &EncodeOptions {
            parallel: true,
            threads: Some(3),
        },
    )
    .unwrap();
    assert_eq!(seq, par);
    seq.validate().unwrap();
}

#[test]
fn zero_threads_is_rejected() {
    let opts = EncodeOptions {
        parallel: true,
        threads: Some(0),
    };
    let err = encode_with(&grid(1, 1, &[S]), &opts).unwrap_err();
    assert!(matches!(err, SpriteError::Validation(_)));
}

#[test]
fn sequential_options_fall_back_to_encode() {
    let g = grid(2, 1, &[H, S]);
    assert_eq!(encode_with(&g, &EncodeOptions::default()).unwrap(), encode(&g));
}
