use plot3d_reader::{Endianness, FormatDescriptor, MarkerWidth, Plot3dError, Precision, Real};

#[test]
fn options_resolve_to_widths_and_order() {
    let format = FormatDescriptor::from_options("double", 8, "big").expect("valid options");
    assert_eq!(format.marker_width(), 8);
    assert_eq!(format.int_width(), 4);
    assert_eq!(format.real_width(), 8);
    assert_eq!(format.byte_order(), Endianness::Big);
    assert_eq!(format.precision(), Precision::Double);
    assert_eq!(format.dimensions_record_len(), 12);
    assert_eq!(format.parameters_record_len(), 28);

    let single = FormatDescriptor::from_options("single", 4, "little").expect("valid options");
    assert_eq!(
        single,
        FormatDescriptor::resolve(Precision::Single, MarkerWidth::Four, Endianness::Little)
    );
    assert_eq!(single.parameters_record_len(), 16);
}

#[test]
fn out_of_range_options_are_configuration_errors() {
    let cases: [(&str, usize, &str); 5] = [
        ("half", 4, "little"),
        ("Single", 4, "little"),
        ("single", 2, "little"),
        ("single", 16, "big"),
        ("double", 8, "middle"),
    ];
    for (precision, marker, order) in cases {
        let result = FormatDescriptor::from_options(precision, marker, order);
        assert!(
            matches!(result, Err(Plot3dError::InvalidConfiguration(_))),
            "({}, {}, {}) should be rejected, got {:?}",
            precision,
            marker,
            order,
            result
        );
    }
}

#[test]
fn options_parse_from_strings() {
    assert_eq!("single".parse::<Precision>().unwrap(), Precision::Single);
    assert_eq!("8".parse::<MarkerWidth>().unwrap(), MarkerWidth::Eight);
    assert_eq!("big".parse::<Endianness>().unwrap(), Endianness::Big);
    assert!(matches!("eight".parse::<MarkerWidth>(), Err(Plot3dError::InvalidConfiguration(_))));
    assert!(matches!(MarkerWidth::try_from(0usize), Err(Plot3dError::InvalidConfiguration(_))));
}

#[test]
fn display_uses_type_codes() {
    let little = FormatDescriptor::resolve(Precision::Single, MarkerWidth::Four, Endianness::Little);
    assert_eq!(little.to_string(), "marker=<i int=<i real=<f");

    let big = FormatDescriptor::resolve(Precision::Double, MarkerWidth::Eight, Endianness::Big);
    assert_eq!(big.to_string(), "marker=>q int=>i real=>d");
}

#[test]
fn real_type_is_checked_against_precision() {
    assert_eq!(<f32 as Real>::PRECISION, Precision::Single);
    assert_eq!(<f64 as Real>::PRECISION, Precision::Double);

    let single = FormatDescriptor::resolve(Precision::Single, MarkerWidth::Eight, Endianness::Big);
    assert!(single.check_real::<f32>().is_ok());
    assert!(matches!(single.check_real::<f64>(), Err(Plot3dError::InvalidConfiguration(_))));

    let double = FormatDescriptor::resolve(Precision::Double, MarkerWidth::Four, Endianness::Little);
    assert!(double.check_real::<f64>().is_ok());
    assert!(matches!(double.check_real::<f32>(), Err(Plot3dError::InvalidConfiguration(_))));
}
