use crate::primitives::*;

pub fn points_card(card: ECard) -> isize {
    match card.schlag() {
        ESchlag::S2 | ESchlag::S3 | ESchlag::S4 | ESchlag::S5 | ESchlag::S6 => 0,
        ESchlag::Queen => 2,
        ESchlag::Jack => 3,
        ESchlag::King => 4,
        ESchlag::Seven => 10,
        ESchlag::Ace => 11,
    }
}

pub fn points_trick(trick: &STrick) -> isize {
    trick.iter()
        .map(|(_epos, card)| points_card(card))
        .sum()
}

#[test]
fn test_points_card() {
    use crate::primitives::card_values::*;
    assert_eq!(points_card(HA), 11);
    assert_eq!(points_card(C7), 10);
    assert_eq!(points_card(SK), 4);
    assert_eq!(points_card(DJ), 3);
    assert_eq!(points_card(HQ), 2);
    assert_eq!(points_card(H6), 0);
    assert_eq!(points_card(S2), 0);
    // the whole deck carries 120 points
    assert_eq!(
        <ECard as plain_enum::PlainEnum>::values().map(points_card).sum::<isize>(),
        120
    );
}

#[test]
fn test_points_trick() {
    use crate::primitives::card_values::*;
    assert_eq!(points_trick(&STrick::new([CA, C7, C2, C3])), 21);
    assert_eq!(points_trick(&STrick::new([H2, H3, H4, H5])), 0);
    // points do not depend on who wins the trick
    assert_eq!(points_trick(&STrick::new([C2, HA, C3, C4])), 11);
}
