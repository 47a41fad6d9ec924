//! Compiled-in sentiment dataset.
//!
//! Aggregate X/Twitter sentiment per brand or game community; shares are of
//! each group's total posts.

use once_cell::sync::Lazy;

use super::model::SentimentGroupRecord;
use super::store::SentimentStore;

struct GroupRow {
    group: &'static str,
    positive: f64,
    negative: f64,
    neutral: f64,
    irrelevant: f64,
}

static STORE: Lazy<SentimentStore> = Lazy::new(|| {
    SentimentStore::new(
        GROUP_ROWS
            .iter()
            .map(|row| SentimentGroupRecord {
                group: row.group.to_string(),
                positive: row.positive,
                negative: row.negative,
                neutral: row.neutral,
                irrelevant: row.irrelevant,
            })
            .collect(),
    )
});

/// Process-wide immutable sentiment store.
pub fn sentiment_store() -> &'static SentimentStore {
    &STORE
}

const GROUP_ROWS: &[GroupRow] = &[
    GroupRow { group: "Amazon", positive: 0.0829015544, negative: 0.2487046632, neutral: 0.5336787565, irrelevant: 0.1347150259 },
    GroupRow { group: "ApexLegends", positive: 0.0808080808, negative: 0.2525252525, neutral: 0.3964646465, irrelevant: 0.2702020202 },
    GroupRow { group: "AssassinsCreed", positive: 0.1176470588, negative: 0.1684491979, neutral: 0.0695187166, irrelevant: 0.6443850267 },
    GroupRow { group: "Battlefield", positive: 0.3913043478, negative: 0.2020460358, neutral: 0.1534526854, irrelevant: 0.2531969309 },
    GroupRow { group: "Borderlands", positive: 0.1050328228, negative: 0.1864332604, neutral: 0.2625820569, irrelevant: 0.44595186 },
    GroupRow { group: "CS-GO", positive: 0.2760416667, negative: 0.1510416667, neutral: 0.2395833333, irrelevant: 0.3333333333 },
    GroupRow { group: "CallOfDuty", positive: 0.2807017544, negative: 0.373433584, neutral: 0.1578947368, irrelevant: 0.1879699248 },
    GroupRow { group: "CallOfDutyBlackopsColdWar", positive: 0.2424242424, negative: 0.2424242424, neutral: 0.1515151515, irrelevant: 0.3636363636 },
    GroupRow { group: "Cyberpunk2077", positive: 0.2083333333, negative: 0.1692708333, neutral: 0.203125, irrelevant: 0.4192708333 },
    GroupRow { group: "Dota2", positive: 0.1802030457, negative: 0.3248730964, neutral: 0.2487309645, irrelevant: 0.2461928934 },
    GroupRow { group: "FIFA", positive: 0.2384615385, negative: 0.5025641026, neutral: 0.0435897436, irrelevant: 0.2153846154 },
    GroupRow { group: "Facebook", positive: 0.2911392405, negative: 0.3037974684, neutral: 0.3316455696, irrelevant: 0.0734177215 },
    GroupRow { group: "Fortnite", positive: 0.3693931398, negative: 0.308707124, neutral: 0.073878628, irrelevant: 0.2480211082 },
    GroupRow { group: "Google", positive: 0.227154047, negative: 0.2584856397, neutral: 0.3577023499, irrelevant: 0.1566579634 },
    GroupRow { group: "GrandTheftAuto(GTA)", positive: 0.3307291667, negative: 0.2578125, neutral: 0.140625, irrelevant: 0.2708333333 },
    GroupRow { group: "Hearthstone", positive: 0.0992167102, negative: 0.2297650131, neutral: 0.3080939948, irrelevant: 0.362924282 },
    GroupRow { group: "HomeDepot", positive: 0.1272727273, negative: 0.3896103896, neutral: 0.1454545455, irrelevant: 0.3376623377 },
    GroupRow { group: "LeagueOfLegends", positive: 0.1303258145, negative: 0.2681704261, neutral: 0.343358396, irrelevant: 0.2581453634 },
    GroupRow { group: "MaddenNFL", positive: 0.0375, negative: 0.7125, neutral: 0.085, irrelevant: 0.165 },
    GroupRow { group: "Microsoft", positive: 0.0725, negative: 0.3225, neutral: 0.3525, irrelevant: 0.2525 },
    GroupRow { group: "NBA2K", positive: 0.0765306122, negative: 0.6275510204, neutral: 0.1147959184, irrelevant: 0.181122449 },
    GroupRow { group: "Nvidia", positive: 0.0391644909, negative: 0.227154047, neutral: 0.3785900783, irrelevant: 0.3550913838 },
    GroupRow { group: "Overwatch", positive: 0.2879177378, negative: 0.2699228792, neutral: 0.1285347044, irrelevant: 0.3136246787 },
    GroupRow { group: "PlayStation5(PS5)", positive: 0.1714285714, negative: 0.1974025974, neutral: 0.2233766234, irrelevant: 0.4077922078 },
    GroupRow { group: "PlayerUnknownsBattlegrounds(PUBG)", positive: 0.3984168865, negative: 0.3060686016, neutral: 0.1160949868, irrelevant: 0.1794195251 },
    GroupRow { group: "RedDeadRedemption(RDR)", positive: 0.0928381963, negative: 0.1352785146, neutral: 0.3607427056, irrelevant: 0.4111405836 },
    GroupRow { group: "TomClancysGhostRecon", positive: 0.010230179, negative: 0.3836317136, neutral: 0.3427109974, irrelevant: 0.26342711 },
    GroupRow { group: "TomClancysRainbowSix", positive: 0.04, negative: 0.4675, neutral: 0.2725, irrelevant: 0.22 },
    GroupRow { group: "Verizon", positive: 0.0780856423, negative: 0.4609571788, neutral: 0.2392947103, irrelevant: 0.2216624685 },
    GroupRow { group: "WorldOfCraft", positive: 0.0913705584, negative: 0.1446700508, neutral: 0.4517766497, irrelevant: 0.3121827411 },
    GroupRow { group: "Xbox(Xseries)", positive: 0.3213367609, negative: 0.1619537275, neutral: 0.177377892, irrelevant: 0.3393316195 },
    GroupRow { group: "johnson&johnson", positive: 0.0850515464, negative: 0.3634020619, neutral: 0.4355670103, irrelevant: 0.1159793814 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_has_32_distinct_groups() {
        let store = sentiment_store();
        assert_eq!(store.len(), 32);
        assert_eq!(store.groups().len(), 32);
    }

    #[test]
    fn test_amazon_lookup_scenario() {
        let record = sentiment_store().lookup("Amazon").unwrap();
        assert_eq!(record.positive, 0.0829015544);
        assert_eq!(record.negative, 0.2487046632);
        assert_eq!(record.neutral, 0.5336787565);
        assert_eq!(record.irrelevant, 0.1347150259);

        assert!(sentiment_store().lookup("Nonexistent").is_none());
    }

    #[test]
    fn test_shares_roughly_sum_to_one() {
        for record in sentiment_store().records() {
            let total = record.positive + record.negative + record.neutral + record.irrelevant;
            assert!((total - 1.0).abs() < 0.01, "{}: {}", record.group, total);
        }
    }

    #[test]
    fn test_every_shipped_breakdown_has_four_slices() {
        // No shipped group has a zero share; the slice filter only bites on
        // constructed data.
        let store = sentiment_store();
        for group in store.groups() {
            assert_eq!(store.breakdown(&group).len(), 4, "{group}");
        }
    }
}
