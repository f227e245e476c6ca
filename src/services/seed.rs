//! Offers inserted into an empty catalog at startup

use chrono::{DateTime, TimeDelta, Utc};

use crate::storage::{Offer, OfferFields};

struct SeedOffer {
    title: &'static str,
    bonus: &'static str,
    description: &'static str,
    color: &'static str,
    logo: &'static str,
    link: &'static str,
    tags: &'static [&'static str],
}

const PEXELS_LOGO_A: &str = "https://images.pexels.com/photos/6990180/pexels-photo-6990180.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&dpr=1";
const PEXELS_LOGO_B: &str = "https://images.pexels.com/photos/6990348/pexels-photo-6990348.jpeg?auto=compress&cs=tinysrgb&w=100&h=100&dpr=1";
const CASHBACK_50_FS: &str =
    "10% de CASHBACK INSTANTANÉ dès la création de votre compte + 50 Freespins";

const SEED_OFFERS: &[SeedOffer] = &[
    SeedOffer {
        title: "Betify",
        bonus: "100% offert + 30 Free Spins (en Raw Money)",
        description: "Jusqu'à 20% de cashback tout les lundi !",
        color: "linear-gradient(to right, #00c851, #007e33)",
        logo: PEXELS_LOGO_A,
        link: "https://bit.ly/BetifySkrymi",
        tags: &["Crypto", "CB", "VIP Rank"],
    },
    SeedOffer {
        title: "Winningz",
        bonus: "CODE : WZMEGA - 200% de bonus jusqu'à 20 000€",
        description: "200 Free Spins offerts (50 par jour pendant 4 jours) + Jusqu'à 20% de cashback",
        color: "linear-gradient(to right, #3a86ff, #e63946)",
        logo: PEXELS_LOGO_B,
        link: "https://bit.ly/SkrymiWinningz",
        tags: &["Crypto", "CB", "Retrait en 1h", "VIP Rank"],
    },
    SeedOffer {
        title: "Samba Slots",
        bonus: "200% de BONUS jusqu'à 5'000€",
        description: CASHBACK_50_FS,
        color: "linear-gradient(to right, #fcd34d, #fbbf24)",
        logo: "https://images.unsplash.com/photo-1550496635-97c10f749275?w=100&h=100&fit=crop",
        link: "https://bit.ly/SkrymiSamba",
        tags: &["Crypto", "CB", "Retrait en 1h"],
    },
    SeedOffer {
        title: "BetBlast",
        bonus: "200% jusqu'à 7500€",
        description: "50 Free Spins sur Wanted Dead or a Wild",
        color: "linear-gradient(to right, #007e33, #808080)",
        logo: "https://images.unsplash.com/photo-1605317068450-d6878f5c8dbb?w=100&h=100&fit=crop",
        link: "https://bit.ly/SkrymiBetblast",
        tags: &["Crypto", "CB", "Retrait en 1h", "VIP Rank"],
    },
    SeedOffer {
        title: "Fast Slots",
        bonus: "200% de BONUS jusqu'à 5'000€",
        description: CASHBACK_50_FS,
        color: "linear-gradient(to right, #7f00ff, #e100ff)",
        logo: "https://images.unsplash.com/photo-1583512603834-01a3a1e56241?w=100&h=100&fit=crop",
        link: "https://bit.ly/FastSkrymi",
        tags: &["Crypto", "CB", "Retrait en 1h"],
    },
    SeedOffer {
        title: "Golden Panda",
        bonus: "200% de BONUS jusqu'à 5'000€",
        description: CASHBACK_50_FS,
        color: "linear-gradient(to right, #d4af37, #ffd700)",
        logo: PEXELS_LOGO_A,
        link: "https://bit.ly/SkrymiGolden",
        tags: &["Crypto", "CB", "Retrait en 1h"],
    },
    SeedOffer {
        title: "X7Casino",
        bonus: "500%",
        description: "50 Free Spins sur Big Bass Bonanza + 10% Cashback chaque lundi",
        color: "linear-gradient(to right, #e63946, #3a86ff)",
        logo: PEXELS_LOGO_B,
        link: "http://bit.ly/SkrymiX7",
        tags: &["Crypto", "CB"],
    },
];

/// Build the default offers with fresh identities
///
/// 时间戳按秒递增，最后一条为 `now`，列表按 created_at 排序时保持种子顺序
pub fn default_offers(now: DateTime<Utc>) -> Vec<Offer> {
    let last = SEED_OFFERS.len() as i64 - 1;
    SEED_OFFERS
        .iter()
        .enumerate()
        .map(|(i, seed)| {
            Offer::new(
                OfferFields {
                    title: seed.title.to_string(),
                    bonus: seed.bonus.to_string(),
                    description: seed.description.to_string(),
                    color: seed.color.to_string(),
                    logo: seed.logo.to_string(),
                    link: seed.link.to_string(),
                    tags: seed.tags.iter().map(|t| t.to_string()).collect(),
                },
                now - TimeDelta::seconds(last - i as i64),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_default_offers() {
        let offers = default_offers(Utc::now());
        assert_eq!(offers.len(), 7);
        assert_eq!(offers[0].title, "Betify");
        assert_eq!(offers[6].title, "X7Casino");
        assert!(offers.iter().all(|o| o.clicks == 0));

        let ids: HashSet<_> = offers.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids.len(), offers.len());
    }

    #[test]
    fn test_default_offers_have_increasing_timestamps() {
        let now = Utc::now();
        let offers = default_offers(now);

        assert!(offers.windows(2).all(|w| w[0].created_at < w[1].created_at));
        assert!(offers.iter().all(|o| o.created_at == o.updated_at));
        assert_eq!(offers[6].created_at, now);
        // 相邻间隔一整秒，秒级精度的 TIMESTAMP 列也能区分
        assert_eq!(offers[1].created_at - offers[0].created_at, TimeDelta::seconds(1));
    }
}
