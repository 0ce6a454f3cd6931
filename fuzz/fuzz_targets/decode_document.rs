#![no_main]

use libfuzzer_sys::fuzz_target;
use bertlv::{Element, Mode};
use bertlv::decode::{Document, Options};

fn check_bounds(elem: &Element) {
    if let Some(children) = elem.children() {
        let used: usize = children.iter().map(Element::encoded_len).sum();
        assert!(used <= elem.length());
        children.iter().for_each(check_bounds);
    }
    else {
        assert_eq!(elem.value().map(|v| v.len()), Some(elem.length()));
    }
}

fn is_padding(data: &[u8]) -> bool {
    data.iter().all(|&octet| octet == 0x00 || octet == 0xFF)
}

fuzz_target!(|data: &[u8]| {
    // Strict mode: every element stays within its parent, and elements
    // and padding together cover exactly the input if decoding succeeds.
    let mut doc = Document::new(data.to_vec());
    let mut covered = 0;
    loop {
        match doc.next_element() {
            Ok(Some(elem)) => {
                check_bounds(&elem);
                let end = doc.pos().to_usize();
                assert!(elem.encoded_len() <= end);
                let start = end - elem.encoded_len();
                assert!(covered <= start);
                assert!(is_padding(&data[covered..start]));
                covered = end;
                let _ = elem.to_string();
            }
            Ok(None) => {
                assert!(is_padding(&data[covered..]));
                assert!(doc.is_exhausted());
                assert_eq!(doc.pos().to_usize(), data.len());
                break
            }
            Err(_) => {
                assert!(covered <= data.len());
                assert!(doc.pos().to_usize() <= data.len());
                break
            }
        }
    }

    // Unbounded mode must not panic either.
    let _ = Options::default().with_mode(Mode::Unbounded).decode(
        data.to_vec()
    );
});
