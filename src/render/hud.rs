//! HUD text and its placement.
use raylib::prelude::*;

use crate::core::game::Game;

const CONTROLS: [&str; 4] = [
    "Player: I/J/K/L move | U=up O=down (float)",
    "Camera: 1=front 2=top 3=side 4=free 5=chase | WASDQE move | arrows turn (chase resets on player move)",
    "Animations: M=start majors N=stop majors | V=start regulars B=stop regulars",
    "Esc quits",
];

#[derive(Clone, Debug, PartialEq)]
pub struct HudText {
    pub status: String,
    pub banner: Option<&'static str>,
}

fn on_off(on: bool) -> &'static str {
    if on { "ON" } else { "OFF" }
}

impl HudText {
    pub fn from_game(game: &Game) -> Self {
        let s = &game.session;
        let status = format!(
            "Time: {:.0} Collected: {}/{} View:{} MajAnim:{} RegAnim:{}",
            s.time_left,
            s.collected,
            s.total,
            s.view.number(),
            on_off(game.scene.majors_animating()),
            on_off(game.scene.regulars_animating()),
        );
        let banner = match (s.over, s.win) {
            (false, _) => None,
            (true, true) => Some("GAME WIN - Press R to restart"),
            (true, false) => Some("GAME LOSE - Press R to restart"),
        };
        Self { status, banner }
    }
}

/// Draws the HUD in screen space; `width`/`height` are the viewport size.
pub fn draw_hud<D: RaylibDraw>(d: &mut D, hud: &HudText, width: i32, height: i32) {
    d.draw_text(&hud.status, 10, 10, 12, Color::WHITE);
    for (i, line) in CONTROLS.iter().enumerate() {
        d.draw_text(line, 10, 30 + 15 * i as i32, 10, Color::LIGHTGRAY);
    }
    if let Some(msg) = hud.banner {
        d.draw_text(msg, width / 2 - 150, height / 2, 20, Color::GOLD);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::GameConfig;
    use std::time::Instant;

    #[test]
    fn status_line_reflects_session() {
        let mut g = Game::new(GameConfig::default(), Instant::now());
        let hud = HudText::from_game(&g);
        assert_eq!(hud.status, "Time: 90 Collected: 0/3 View:1 MajAnim:ON RegAnim:ON");
        assert_eq!(hud.banner, None);

        g.scene.set_regulars_animating(false);
        g.session.collected = 2;
        g.session.time_left = 41.2;
        let hud = HudText::from_game(&g);
        assert_eq!(hud.status, "Time: 41 Collected: 2/3 View:1 MajAnim:ON RegAnim:OFF");
    }

    #[test]
    fn banner_on_game_over() {
        let mut g = Game::new(GameConfig::default(), Instant::now());
        g.step(100.0);
        assert_eq!(HudText::from_game(&g).banner, Some("GAME LOSE - Press R to restart"));
        g.session.win = true;
        assert_eq!(HudText::from_game(&g).banner, Some("GAME WIN - Press R to restart"));
    }
}
