#![no_main]

use libfuzzer_sys::fuzz_target;

use strassen_core::cancel::CancellationToken;
use strassen_core::direct::multiply_direct;
use strassen_core::options::Options;
use strassen_core::{strassen, Element, Matrix};

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First byte picks n in 1..=12, second the threshold in 1..=4
    let n = usize::from(data[0] % 12) + 1;
    let threshold = usize::from(data[1] % 4) + 1;
    let body = &data[2..];
    if body.len() < 2 * n * n {
        return;
    }
    let entry = |i: usize| Element::from(i8::from_le_bytes([body[i]]));
    let a = Matrix::from_vec(n, n, (0..n * n).map(entry).collect()).unwrap();
    let b = Matrix::from_vec(n, n, (n * n..2 * n * n).map(entry).collect()).unwrap();

    let cancel = CancellationToken::new();
    let got = strassen::multiply(&a, &b, &Options { threshold }, &cancel).unwrap();
    assert_eq!(got, multiply_direct(&a, &b).unwrap());
});
