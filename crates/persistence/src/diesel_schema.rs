// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

diesel::table! {
    seats (seat_pk) {
        seat_pk -> BigInt,
        service -> Text,
        seat -> Text,
        status -> Text,
        first_name -> Nullable<Text>,
        middle_initial -> Nullable<Text>,
        surname -> Nullable<Text>,
        booked_at -> Nullable<Text>,
        ticket_type -> Nullable<Text>,
        base_price_centavos -> Nullable<BigInt>,
        final_price_centavos -> Nullable<BigInt>,
        contact -> Nullable<Text>,
        street -> Nullable<Text>,
        barangay -> Nullable<Text>,
        city -> Nullable<Text>,
        province -> Nullable<Text>,
        postal_code -> Nullable<Text>,
        id_type -> Nullable<Text>,
        id_number -> Nullable<Text>,
        verified_at -> Nullable<Text>,
    }
}

diesel::table! {
    audit_log (entry_id) {
        entry_id -> BigInt,
        recorded_at -> Text,
        service -> Text,
        seat -> Text,
        action -> Text,
        details -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(seats, audit_log);
