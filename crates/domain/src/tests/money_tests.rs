// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::Money;

#[test]
fn test_pesos_and_centavos_agree() {
    assert_eq!(Money::from_pesos(150), Money::from_centavos(15_000));
}

#[test]
fn test_display_groups_thousands_and_pads_centavos() {
    assert_eq!(Money::from_pesos(1_200).to_string(), "₱1,200.00");
    assert_eq!(Money::from_centavos(8_050).to_string(), "₱80.50");
    assert_eq!(Money::from_centavos(5).to_string(), "₱0.05");
    assert_eq!(Money::ZERO.to_string(), "₱0.00");
}

#[test]
fn test_raw_peso_value_rounds_to_centavo() {
    assert_eq!(Money::from_peso_value(120.0), Money::from_pesos(120));
    assert_eq!(Money::from_peso_value(79.999), Money::from_centavos(8_000));
}

#[test]
fn test_saturating_add_never_wraps() {
    let max: Money = Money::from_centavos(i64::MAX);
    assert_eq!(max.saturating_add(Money::from_pesos(1)), max);
}
