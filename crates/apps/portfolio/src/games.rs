use leptos::*;
use system_ui::prelude::*;

struct Game {
    name: &'static str,
    platform: &'static str,
    image: &'static str,
}

const GAMES: [Game; 6] = [
    Game {
        name: "GTA V : ONLINE",
        platform: "PC",
        image: "/assets/games/gtav.jpg",
    },
    Game {
        name: "Free Fire",
        platform: "Mobile/PC",
        image: "/assets/games/freefire.jpg",
    },
    Game {
        name: "Genshin Impact",
        platform: "Mobile/PC",
        image: "/assets/games/genshin.jpg",
    },
    Game {
        name: "Wuthering Waves",
        platform: "Mobile/PC",
        image: "/assets/games/wuwa.jpg",
    },
    Game {
        name: "Honkai Star Rail",
        platform: "Mobile/PC",
        image: "/assets/games/starrail.jpg",
    },
    Game {
        name: "Brawlhalla",
        platform: "Mobile/PC",
        image: "/assets/games/brawlhalla.jpg",
    },
];

#[component]
/// Grid of games with cover art.
pub fn GamesApp() -> impl IntoView {
    view! {
        <div class="app-shell app-games">
            <Heading level=2>"Games I Play"</Heading>
            <div class="games-grid">
                {GAMES
                    .iter()
                    .map(|game| {
                        view! {
                            <Card layout_class="games-card">
                                <img class="games-cover" src=game.image alt=game.name />
                                <div class="games-card-body">
                                    <Heading level=3>{game.name}</Heading>
                                    <Text tone=TextTone::Secondary>{game.platform}</Text>
                                </div>
                            </Card>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
