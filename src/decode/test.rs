#![cfg(test)]

use crate::element::Element;
use crate::mode::Mode;
use super::*;

fn decode_hex(s: &str) -> Result<Vec<Element>, DecodeError> {
    decode(hex::decode(s).unwrap())
}

#[test]
fn single_primitive() {
    let elements = decode_hex(
        "911001020304050607080910111213141516"
    ).unwrap();
    assert_eq!(elements.len(), 1);
    let elem = &elements[0];
    assert!(elem.is_primitive());
    assert_eq!(elem.tag().as_slice(), b"\x91");
    assert_eq!(elem.length(), 16);
    assert_eq!(
        elem.value().unwrap().as_ref(),
        hex::decode("01020304050607080910111213141516").unwrap().as_slice()
    );
}

#[test]
fn short_form_advances() {
    for len in [0usize, 1, 5, 127] {
        let mut data = vec![0x5A, len as u8];
        data.extend(std::iter::repeat(0x42).take(len));
        data.extend_from_slice(b"\x91\x01\x05");

        let mut doc = Document::new(data);
        let elem = doc.next_element().unwrap().unwrap();
        assert_eq!(elem.length(), len);
        assert_eq!(elem.value().unwrap().len(), len);
        assert_eq!(doc.pos(), Pos::from(2 + len));
        assert_eq!(doc.next_element().unwrap().unwrap().length(), 1);
        assert!(doc.next_element().unwrap().is_none());
    }
}

#[test]
fn multi_octet_tag() {
    let elements = decode_slice(b"\xDF\x81\x23\x02\xAB\xCD").unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].tag().as_slice(), b"\xDF\x81\x23");
    assert_eq!(elements[0].value().unwrap().as_ref(), b"\xAB\xCD");
}

#[test]
fn long_form_length() {
    let mut data = vec![0x5A, 0x82, 0x01, 0x00];
    data.extend(std::iter::repeat(0x11).take(256));
    let elements = decode(data).unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].length(), 256);
    assert_eq!(elements[0].encoded_len(), 260);
}

#[test]
fn leading_padding() {
    let elements = decode_slice(b"\x00\x91\x01\x05").unwrap();
    assert_eq!(elements.len(), 1);
    assert_eq!(elements[0].tag().as_slice(), b"\x91");
    assert_eq!(elements[0].length(), 1);
    assert_eq!(elements[0].value().unwrap().as_ref(), b"\x05");
}

#[test]
fn nested_templates() {
    // FCI template with a proprietary template inside.
    let elements = decode_hex(
        "6F1A840E315041592E5359532E4444463031A5088801025F2D02656E"
    ).unwrap();
    assert_eq!(elements.len(), 1);
    let fci = &elements[0];
    assert_eq!(fci.length(), 0x1A);
    assert_eq!(fci.encoded_len(), 0x1C);
    let children = fci.children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].value().unwrap().as_ref(), b"1PAY.SYS.DDF01");

    let prop = &children[1];
    assert_eq!(prop.tag().to_hex(), "A5");
    let children = prop.children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].tag().to_hex(), "88");
    assert_eq!(children[1].tag().to_hex(), "5F2D");
    assert_eq!(children[1].value().unwrap().as_ref(), b"en");

    // Consumed octets of the children add up to the declared length.
    let sum: usize = fci.children().unwrap().iter().map(|child| {
        child.encoded_len()
    }).sum();
    assert_eq!(sum, fci.length());
}

#[test]
fn bounded_children() {
    // The template claims three octets, which cuts its child short. The
    // following top-level element must not be taken as the missing part.
    let err = decode_slice(b"\x70\x03\x5A\x82\x00\x91\x01\x05")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.pos(), Pos::from(4));

    let err = decode_slice(b"\x70\x02\x9F\x02\x01\x05").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.pos(), Pos::from(4));

    // Same without a cut header: the child’s value doesn’t fit.
    let err = decode_slice(b"\x70\x03\x5A\x02\x01\x02\x91\x01\x05")
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthExceedsBuffer);
}

#[test]
fn unbounded_mode() {
    // The same data as above decodes in unbounded mode because the template
    // simply takes everything that follows.
    let options = Options::default().with_mode(Mode::Unbounded);
    let elements = options.decode(
        &b"\x70\x03\x5A\x02\x01\x02\x91\x01\x05"[..]
    ).unwrap();
    assert_eq!(elements.len(), 1);
    let children = elements[0].children().unwrap();
    assert_eq!(children.len(), 2);
    assert_eq!(children[0].value().unwrap().as_ref(), b"\x01\x02");
    assert_eq!(children[1].tag().to_hex(), "91");

    // Primitive values are still checked.
    assert_eq!(
        options.decode(&b"\x91\x05\x01"[..]).unwrap_err().kind(),
        ErrorKind::LengthExceedsBuffer
    );
}

#[test]
fn emv_sample() {
    let data = "911001020304050607080910111213141516\
                720E1111222222222233334444444444";

    // The template 72 claims 14 octets but its first child wants 17.
    let mut doc = Document::new(hex::decode(data).unwrap());
    let first = doc.next_element().unwrap().unwrap();
    assert_eq!(first.tag().to_hex(), "91");
    let err = doc.next_element().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::LengthExceedsBuffer);
    assert_eq!(err.pos(), Pos::from(21));
    assert_eq!(decode_hex(data).unwrap_err(), err);
}

#[test]
fn trailing_garbage() {
    // Trailing padding is fine.
    assert_eq!(decode_slice(b"\x91\x01\x05\x00\xFF").unwrap().len(), 1);

    // A trailing tag without length isn’t.
    let err = decode_slice(b"\x91\x01\x05\x5A").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.pos(), Pos::from(4));

    // Neither is a trailing incomplete multi-octet tag.
    let err = decode_slice(b"\x91\x01\x05\x9F").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
}

#[test]
fn indefinite_length() {
    let err = decode_slice(b"\x70\x80\x5A\x01\x42\x00\x00").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedLengthForm);
    assert_eq!(err.pos(), Pos::from(1));
}

#[test]
fn max_length_octets() {
    // 0xFF announces 127 length octets, all zero here.
    let mut data = vec![0x5A, 0xFF];
    data.extend(std::iter::repeat(0).take(127));
    data.extend_from_slice(b"\x91\x01\x05");
    let elements = decode(data).unwrap();
    assert_eq!(elements.len(), 2);
    assert_eq!(elements[0].length(), 0);
    assert_eq!(elements[0].encoded_len(), 129);
    assert_eq!(elements[1].tag().to_hex(), "91");

    let err = decode_slice(b"\x5A\xFF\x00\x00").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.pos(), Pos::from(2));
}

#[test]
fn deep_nesting() {
    // Forty nested templates, each with one octet less than its parent.
    let depth = 40;
    let mut data = Vec::new();
    for i in 0..depth {
        data.push(0x70);
        data.push((2 * (depth - i - 1)) as u8);
    }
    assert_eq!(
        decode(data.clone()).unwrap_err().kind(),
        ErrorKind::NestingTooDeep
    );
    let elements = Options::default().with_max_depth(depth).decode(data)
        .unwrap();
    assert_eq!(elements.len(), 1);
}

#[test]
fn long_tag() {
    let data = b"\x9F\x81\x81\x81\x01\x00";
    assert_eq!(
        decode_slice(data).unwrap_err().kind(),
        ErrorKind::NestingTooDeep
    );
    let elements = Options::default().with_max_tag_len(5).decode(
        &data[..]
    ).unwrap();
    assert_eq!(elements[0].tag().encoded_len(), 5);
}

#[test]
fn covered_input() {
    // Elements and padding together account for every input octet.
    let data = b"\x00\x5A\x01\x42\xFF\xFF\x70\x04\x00\x91\x01\x05\x00";
    let mut doc = Document::new(&data[..]);
    let mut covered = 0;
    let mut padding = 0;
    while let Some(elem) = doc.next_element().unwrap() {
        let end = doc.pos().to_usize();
        let start = end - elem.encoded_len();
        padding += data[covered..start].iter().filter(|&&octet| {
            octet == 0x00 || octet == 0xFF
        }).count();
        covered = end;
    }
    padding += data[covered..].len();
    assert_eq!(padding, 4);
    assert_eq!(doc.pos().to_usize(), data.len());
    assert_eq!(
        decode_slice(data).unwrap().iter().map(|elem| {
            elem.encoded_len()
        }).sum::<usize>() + padding,
        data.len()
    );
}

#[test]
fn partial_results() {
    let data = b"\x5A\x01\x42\x9F\x02\x01\x07\x70\x05\x5A\x01";
    let mut elements = Vec::new();
    let mut error = None;
    for item in Document::new(&data[..]) {
        match item {
            Ok(elem) => elements.push(elem),
            Err(err) => error = Some(err),
        }
    }
    assert_eq!(elements.len(), 2);
    assert_eq!(error.unwrap().kind(), ErrorKind::LengthExceedsBuffer);
}
