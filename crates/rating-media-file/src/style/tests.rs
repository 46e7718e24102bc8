// SPDX-FileCopyrightText: Copyright (C) 2018-2026 Uwe Klotz <uwedotklotzatgmaildotcom> et al.
// SPDX-License-Identifier: AGPL-3.0-or-later

use aoide_rating_core::scaler::player::{
    BANSHEE_KEY, DEFAULT_OWN_KEY, KNOWN_EXTERNAL_SCALERS, MEDIA_MONKEY_KEY, MUSICBEE_KEY,
    WINAMP_KEY, WINDOWS_MEDIA_PLAYER_KEY,
};
use test_log::test;

use super::*;
use crate::container::{IMPLICIT_KEY, MemoryTags, TagFamily, audio_flac};

fn mpeg() -> MemoryTags {
    MemoryTags::new(TagFamily::Id3v2, "audio/mpeg".parse().unwrap())
}

fn flac() -> MemoryTags {
    MemoryTags::new(TagFamily::Vorbis, audio_flac())
}

fn ogg() -> MemoryTags {
    MemoryTags::new(TagFamily::Vorbis, "audio/ogg".parse().unwrap())
}

fn wma() -> MemoryTags {
    MemoryTags::new(TagFamily::Asf, "audio/x-ms-wma".parse().unwrap())
}

fn text(value: &str) -> RawValue {
    RawValue::Text(value.to_owned())
}

#[test]
fn write_policy_permits_write() {
    assert!(WritePolicy::RefreshExisting.permits_write(true));
    assert!(!WritePolicy::RefreshExisting.permits_write(false));
    assert!(WritePolicy::RecreateAll.permits_write(true));
    assert!(WritePolicy::RecreateAll.permits_write(false));
}

#[test]
fn popularimeter_external_refreshes_existing_entry() {
    let style = PopularimeterStyle::default_external();
    let mut tags = mpeg().with_entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY, 196u8);
    assert_eq!(Rating::new(8), style.get(&tags).unwrap());

    style.set(&mut tags, Rating::new(9)).unwrap();
    assert_eq!(1, tags.len());
    assert_eq!(
        Some(&RawValue::Integer(224)),
        tags.entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY)
    );
    assert_eq!(Rating::new(9), style.get(&tags).unwrap());
}

#[test]
fn popularimeter_never_introduces_keys() {
    let style = PopularimeterStyle::default_external();
    for rating in Rating::all() {
        let mut tags = mpeg().with_entry(POPULARIMETER_SLOT, BANSHEE_KEY, 1u8);
        style.set(&mut tags, Some(rating)).unwrap();
        assert_eq!(1, tags.len());
        assert_eq!(Some(rating), style.get(&tags).unwrap());
    }
}

#[test]
fn popularimeter_resolves_keys_by_priority() {
    let style = PopularimeterStyle::default_external();
    let tags = mpeg()
        .with_entry(POPULARIMETER_SLOT, MUSICBEE_KEY, 255u8)
        .with_entry(POPULARIMETER_SLOT, BANSHEE_KEY, 64u8);
    assert_eq!(Rating::new(4), style.get(&tags).unwrap());

    let reordered = PopularimeterStyle::external([
        aoide_rating_core::scaler::player::MUSICBEE,
        aoide_rating_core::scaler::player::BANSHEE,
    ]);
    assert_eq!(Rating::new(10), reordered.get(&tags).unwrap());
}

#[test]
fn popularimeter_writes_all_present_keys() {
    let style = PopularimeterStyle::default_external();
    let mut tags = mpeg()
        .with_entry(POPULARIMETER_SLOT, MEDIA_MONKEY_KEY, 1u8)
        .with_entry(POPULARIMETER_SLOT, WINAMP_KEY, 1u8)
        .with_entry(POPULARIMETER_SLOT, "someone@example.com", 1u8);
    style.set(&mut tags, Rating::new(6)).unwrap();
    assert_eq!(
        Some(&RawValue::Integer(128)),
        tags.entry(POPULARIMETER_SLOT, MEDIA_MONKEY_KEY)
    );
    assert_eq!(
        Some(&RawValue::Integer(128)),
        tags.entry(POPULARIMETER_SLOT, WINAMP_KEY)
    );
    // Unknown keys are left alone
    assert_eq!(
        Some(&RawValue::Integer(1)),
        tags.entry(POPULARIMETER_SLOT, "someone@example.com")
    );
}

#[test]
fn popularimeter_set_none_is_noop() {
    let style = PopularimeterStyle::default_external();
    let mut tags = mpeg().with_entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY, 196u8);
    let unmodified = tags.clone();
    style.set(&mut tags, None).unwrap();
    assert_eq!(unmodified, tags);
}

#[test]
fn popularimeter_own_ignores_external_entries() {
    let style = PopularimeterStyle::default_own();
    let mut tags = mpeg().with_entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY, 196u8);
    assert_eq!(None, style.get(&tags).unwrap());

    // The own entry is only refreshed if it exists
    style.set(&mut tags, Rating::new(5)).unwrap();
    assert_eq!(1, tags.len());

    let style = style.with_write_policy(WritePolicy::RecreateAll);
    style.set(&mut tags, Rating::new(5)).unwrap();
    assert_eq!(
        Some(&RawValue::Integer(128)),
        tags.entry(POPULARIMETER_SLOT, DEFAULT_OWN_KEY)
    );
    assert_eq!(Rating::new(5), style.get(&tags).unwrap());
}

#[test]
fn popularimeter_skips_unparsable_entries() {
    let style = PopularimeterStyle::default_external();
    let tags = mpeg()
        .with_entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY, "n/a")
        .with_entry(POPULARIMETER_SLOT, BANSHEE_KEY, 255u8);
    assert_eq!(Rating::new(10), style.get(&tags).unwrap());
}

#[test]
fn fractional_creates_entry_only_for_target_media_type() {
    let style = FractionalStyle::default();

    let mut flac = flac();
    style.set(&mut flac, Rating::new(7)).unwrap();
    assert_eq!(Some(&text("0.7")), flac.entry(FMPS_RATING_SLOT, IMPLICIT_KEY));
    assert_eq!(Rating::new(7), style.get(&flac).unwrap());

    let mut ogg = ogg();
    style.set(&mut ogg, Rating::new(7)).unwrap();
    assert!(ogg.is_empty());
}

#[test]
fn fractional_round_trip() {
    let style = FractionalStyle::default();
    for rating in Rating::all() {
        let mut tags = flac();
        style.set(&mut tags, Some(rating)).unwrap();
        assert_eq!(Some(rating), style.get(&tags).unwrap());
    }
}

#[test]
fn fractional_get_rounds_and_clamps() {
    let style = FractionalStyle::default();
    let get = |value: &str| {
        let tags = ogg().with_entry(FMPS_RATING_SLOT, IMPLICIT_KEY, value);
        style.get(&tags).unwrap()
    };
    assert_eq!(Rating::new(7), get("0.66"));
    assert_eq!(Rating::new(0), get("0"));
    assert_eq!(Rating::new(10), get("1.5"));
    assert_eq!(Rating::new(0), get("-0.2"));
    assert_eq!(None, get("unrated"));
    assert_eq!(None, style.get(&flac()).unwrap());
}

#[test]
fn suffixed_round_trip_in_both_domains() {
    let style = SuffixedStyle::default();
    for empty_tags in [flac(), ogg()] {
        for rating in Rating::all() {
            let mut tags = empty_tags.clone();
            style.set(&mut tags, Some(rating)).unwrap();
            assert_eq!(Some(rating), style.get(&tags).unwrap());
        }
    }
}

#[test]
fn suffixed_recreates_all_entries() {
    let style = SuffixedStyle::default();

    let mut flac = flac();
    style.set(&mut flac, Rating::new(7)).unwrap();
    assert_eq!(DEFAULT_RATING_SUFFIXES.len(), flac.len());
    for suffix in DEFAULT_RATING_SUFFIXES {
        assert_eq!(Some(&text("70")), flac.entry(RATING_SLOT, suffix));
    }

    let mut ogg = ogg();
    style.set(&mut ogg, Rating::new(7)).unwrap();
    assert_eq!(DEFAULT_RATING_SUFFIXES.len(), ogg.len());
    assert_eq!(Some(&text("178.5")), ogg.entry(RATING_SLOT, IMPLICIT_KEY));
}

#[test]
fn suffixed_refreshes_existing_entries() {
    let style = SuffixedStyle::default().with_write_policy(WritePolicy::RefreshExisting);
    let mut tags = flac().with_entry(RATING_SLOT, BANSHEE_KEY, "20");
    style.set(&mut tags, Rating::new(9)).unwrap();
    assert_eq!(1, tags.len());
    assert_eq!(Some(&text("90")), tags.entry(RATING_SLOT, BANSHEE_KEY));
}

#[test]
fn suffixed_resolves_suffixes_by_priority() {
    let style = SuffixedStyle::default();
    let tags = flac()
        .with_entry(RATING_SLOT, BANSHEE_KEY, "100")
        .with_entry(RATING_SLOT, MEDIA_MONKEY_KEY, "n/a")
        .with_entry(RATING_SLOT, IMPLICIT_KEY, "50");
    assert_eq!(Rating::new(5), style.get(&tags).unwrap());

    // The same entries in the byte domain
    let tags = ogg().with_entry(RATING_SLOT, IMPLICIT_KEY, "51");
    assert_eq!(Rating::new(2), style.get(&tags).unwrap());
}

#[test]
fn player_slot_get_and_set() {
    let style = PlayerSlotStyle::default();
    let mut tags = wma();
    assert_eq!(None, style.get(&tags).unwrap());

    style.set(&mut tags, Rating::new(6)).unwrap();
    assert_eq!(
        Some(&RawValue::Integer(6)),
        tags.entry(WM_SHARED_USER_RATING_SLOT, MEDIA_MONKEY_KEY)
    );
    assert_eq!(Rating::new(6), style.get(&tags).unwrap());

    style.set(&mut tags, Rating::new(2)).unwrap();
    assert_eq!(1, tags.len());
    assert_eq!(Rating::new(2), style.get(&tags).unwrap());
}

#[test]
fn player_slot_clamps_out_of_range_values() {
    let style = PlayerSlotStyle::default();
    let get = |value: i64| {
        let tags = wma().with_entry(WM_SHARED_USER_RATING_SLOT, MEDIA_MONKEY_KEY, value);
        style.get(&tags).unwrap()
    };
    assert_eq!(Rating::new(10), get(42));
    assert_eq!(Rating::new(0), get(-3));
}

#[test]
fn styles_ignore_entries_of_other_tag_families() {
    let tags = [
        mpeg()
            .with_entry(FMPS_RATING_SLOT, IMPLICIT_KEY, "0.5")
            .with_entry(RATING_SLOT, BANSHEE_KEY, "255")
            .with_entry(WM_SHARED_USER_RATING_SLOT, MEDIA_MONKEY_KEY, 5i64),
        flac()
            .with_entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY, 196u8)
            .with_entry(WM_SHARED_USER_RATING_SLOT, MEDIA_MONKEY_KEY, 5i64),
        wma()
            .with_entry(POPULARIMETER_SLOT, WINDOWS_MEDIA_PLAYER_KEY, 196u8)
            .with_entry(FMPS_RATING_SLOT, IMPLICIT_KEY, "0.5")
            .with_entry(RATING_SLOT, BANSHEE_KEY, "255"),
    ];
    let style = PopularimeterStyle::default_external();
    assert_eq!(None, style.get(&tags[1]).unwrap());
    assert_eq!(None, style.get(&tags[2]).unwrap());
    let style = FractionalStyle::default();
    assert_eq!(None, style.get(&tags[0]).unwrap());
    assert_eq!(None, style.get(&tags[2]).unwrap());
    let style = SuffixedStyle::default();
    assert_eq!(None, style.get(&tags[0]).unwrap());
    assert_eq!(None, style.get(&tags[2]).unwrap());
    let style = PlayerSlotStyle::default();
    assert_eq!(None, style.get(&tags[0]).unwrap());
    assert_eq!(None, style.get(&tags[1]).unwrap());
}

#[test]
fn suffixed_leaves_other_tag_families_untouched() {
    let style = SuffixedStyle::default();
    for mut tags in [mpeg(), wma()] {
        style.set(&mut tags, Rating::new(7)).unwrap();
        assert!(tags.is_empty());
    }
}

#[test]
fn player_slot_leaves_other_tag_families_untouched() {
    let style = PlayerSlotStyle::default();
    for mut tags in [mpeg(), flac()] {
        style.set(&mut tags, Rating::new(7)).unwrap();
        assert!(tags.is_empty());
    }
}

#[test]
fn popularimeter_leaves_other_tag_families_untouched() {
    let style = PopularimeterStyle::default_external().with_write_policy(WritePolicy::RecreateAll);
    let mut tags = flac();
    style.set(&mut tags, Rating::new(7)).unwrap();
    assert!(tags.is_empty());

    let mut tags = mpeg();
    style.set(&mut tags, Rating::new(7)).unwrap();
    assert_eq!(KNOWN_EXTERNAL_SCALERS.len(), tags.len());
}

#[test]
fn lists_are_unsupported() {
    let styles: [StorageStyle; 4] = [
        PopularimeterStyle::default_external().into(),
        FractionalStyle::default().into(),
        SuffixedStyle::default().into(),
        PlayerSlotStyle::default().into(),
    ];
    let mut tags = flac();
    for style in styles {
        assert!(matches!(
            style.get_list(&tags),
            Err(Error::UnsupportedOperation(_))
        ));
        assert!(matches!(
            style.set_list(&mut tags, &[Rating::MAX]),
            Err(Error::UnsupportedOperation(_))
        ));
    }
    assert!(tags.is_empty());
}

#[derive(Debug)]
struct ConstStyle(Option<Rating>);

impl RatingStyle for ConstStyle {
    fn get(&self, _container: &dyn TagContainer) -> Result<Option<Rating>> {
        Ok(self.0)
    }

    fn set(&self, _container: &mut dyn TagContainer, _rating: Option<Rating>) -> Result<()> {
        Ok(())
    }
}

#[test]
fn custom_style() {
    let style = StorageStyle::Custom(Arc::new(ConstStyle(Rating::new(3))));
    let tags = flac();
    assert_eq!(Rating::new(3), style.get(&tags).unwrap());
    assert!(matches!(
        style.get_list(&tags),
        Err(Error::UnsupportedOperation(_))
    ));
}
