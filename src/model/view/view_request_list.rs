use crate::common::*;

use crate::model::view::view_request::*;

#[derive(Debug, Deserialize, Getters)]
#[getset(get = "pub")]
pub struct ViewRequestList {
    pub view: Vec<ViewRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{celestial_point::*, position_filter::*, stat_column::*, view_kind::*};
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_view_request_list() {
        let list: ViewRequestList = toml::from_str(
            r#"
            [[view]]
            name = "venus"
            kind = "venus_cycle"

            [[view]]
            name = "goalies"
            kind = "horoscope"
            position = "Defensman"
            celestial_point = "North Node"
            show_table = true

            [view.thresholds]
            s1 = 100
            s9 = 0.5
            "#,
        )
        .unwrap();

        let venus: &ViewRequest = &list.view()[0];
        assert_eq!(venus.kind(), &ViewKind::VenusCycle);
        assert_eq!(venus.position(), &PositionFilter::All);
        assert_eq!(venus.celestial_point(), &None);

        let horoscope: &ViewRequest = &list.view()[1];
        assert_eq!(horoscope.position(), &PositionFilter::Defenseman);
        assert_eq!(horoscope.celestial_point(), &Some(CelestialPoint::NorthNode));
        assert_eq!(horoscope.thresholds().get(StatColumn::S1), 100.0);
        assert_eq!(horoscope.thresholds().get(StatColumn::S9), 0.5);
        assert_eq!(horoscope.thresholds().get(StatColumn::S5), 0.0);
    }
}
