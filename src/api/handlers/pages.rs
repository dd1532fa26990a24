use axum::{extract::State, response::Html};

use crate::api::state::AppState;

const PAGE_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Pitch Predictor</title>
</head>
<body>
  <h1>Pitch Predictor</h1>
  <form id="player-form" method="post" action="/get_player_stats">
    <label for="player">Pitcher</label>
    <select id="player" name="player">
"#;

const PAGE_TAIL: &str = r#"    </select>
    <button type="submit">Load games</button>
  </form>
  <form id="game-form" method="post" action="/get_game_stats" hidden>
    <input type="hidden" id="selected_player" name="selected_player">
    <label for="game_date">Game</label>
    <select id="game_date" name="game_date"></select>
    <button type="submit">Predict pitches</button>
  </form>
  <pre id="result"></pre>
  <script>
    const post = (url, form) =>
      fetch(url, { method: "POST", body: new URLSearchParams(new FormData(form)) })
        .then((r) => r.json());

    document.getElementById("player-form").addEventListener("submit", (e) => {
      e.preventDefault();
      post("/get_player_stats", e.target).then((data) => {
        const games = document.getElementById("game-form");
        const dates = document.getElementById("game_date");
        dates.innerHTML = "";
        (data.game_dates || []).forEach((d) => dates.add(new Option(d, d)));
        document.getElementById("selected_player").value = data.selected_player || "";
        games.hidden = !data.game_dates;
        document.getElementById("result").textContent = data.message || "";
      });
    });

    document.getElementById("game-form").addEventListener("submit", (e) => {
      e.preventDefault();
      post("/get_game_stats", e.target).then((data) => {
        document.getElementById("result").textContent = data.message
          ? data.message
          : `model ${data.model_accuracy} / naive ${data.naive_accuracy} over ${data.game_stats.length} pitches`;
      });
    });
  </script>
</body>
</html>
"#;

/// Minimal HTML escaping for text and attribute values
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn render_index(players: &[String]) -> String {
    let mut page = String::from(PAGE_HEAD);
    for player in players {
        let name = escape_html(player);
        page.push_str(&format!(
            "      <option value=\"{name}\">{name}</option>\n"
        ));
    }
    page.push_str(PAGE_TAIL);
    page
}

/// GET /
pub async fn index(State(state): State<AppState>) -> Html<String> {
    Html(render_index(&state.players))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_index_lists_players() {
        let page = render_index(&["Logan Webb".to_string(), "Zac Gallen".to_string()]);
        assert!(page.contains(r#"<option value="Logan Webb">Logan Webb</option>"#));
        assert!(page.contains("Zac Gallen"));
    }

    #[test]
    fn test_render_index_escapes_names() {
        let page = render_index(&["<b>O'Neil</b>".to_string()]);
        assert!(page.contains("&lt;b&gt;O&#39;Neil&lt;/b&gt;"));
        assert!(!page.contains("<b>O'Neil</b>"));
    }
}
