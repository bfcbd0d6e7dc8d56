//! Server-rendered HTML for the library list and item detail pages.
//!
//! Markup is built with plain string formatting; all dynamic values go
//! through [`esc`]. Styling is one static inline stylesheet.

use kinoteka_browse::{ListPage, ListState, SortKey, diff_overrides};
use kinoteka_core::{ItemKind, LibraryItem, title};

const STYLE: &str = r#"
body { margin: 0; background: #141414; color: #eee; font-family: system-ui, sans-serif; }
a { color: inherit; text-decoration: none; }
.topbar { position: sticky; top: 0; background: #1c1c1c; border-bottom: 1px solid rgba(255,255,255,0.06);
          padding: 12px 16px; display: flex; gap: 16px; flex-wrap: wrap; align-items: center; }
.topbar input, .topbar select { background: #262626; color: #eee; border: 1px solid rgba(255,255,255,0.12);
          border-radius: 6px; padding: 8px 10px; }
.topbar input { width: 320px; }
main { max-width: 1200px; margin: 0 auto; padding: 24px 16px; }
.grid { display: grid; grid-template-columns: repeat(auto-fill, minmax(180px, 1fr)); gap: 20px; margin-bottom: 32px; }
.card { background: #262626; border-radius: 8px; overflow: hidden; display: flex; flex-direction: column; }
.card img { width: 100%; height: 240px; object-fit: cover; background: #111; display: block; }
.card .meta { padding: 10px 12px; }
.card .title { font-weight: 600; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; }
.card .sub { color: #9aa0a6; font-size: 0.85em; margin-top: 4px; }
.pager { display: flex; gap: 8px; justify-content: center; flex-wrap: wrap; }
.pager a, .pager span { padding: 6px 12px; border-radius: 6px; background: #262626; }
.pager .current { background: #f05a5a; color: #fff; }
.chips { display: flex; gap: 8px; flex-wrap: wrap; margin: 12px 0; }
.chip { border: 1px solid rgba(255,255,255,0.2); border-radius: 16px; padding: 4px 12px; font-size: 0.85em; }
.detail { display: flex; gap: 32px; flex-wrap: wrap; background: #1e1e1e; border-radius: 10px; padding: 24px; }
.detail .poster { width: 280px; border-radius: 6px; background: #111; }
.detail .info { flex: 1; min-width: 280px; }
.rating { color: #e23b3b; font-size: 1.4em; font-weight: 700; }
.section { margin-top: 20px; }
.section h3 { margin: 0 0 8px; font-size: 1em; }
.empty { text-align: center; color: #9aa0a6; padding: 64px 0; }
.error { text-align: center; padding: 64px 0; }
.watch { background: #e23b3b; color: #fff; border-radius: 6px; padding: 6px 14px; font-weight: 600; }
"#;

/// Minimal HTML escaping for text and attribute values.
fn esc(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
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

fn page_shell(page_title: &str, body: &str) -> String {
    format!(
        "<!doctype html><html lang=\"ru\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>{}</title><style>{STYLE}</style></head><body>{body}</body></html>",
        esc(page_title)
    )
}

/// Link to the list page for `state` with the given page number.
fn list_url(state: &ListState, page: usize) -> String {
    let mut parts: Vec<String> = Vec::new();
    let query = state.query.trim();
    if !query.is_empty() {
        parts.push(format!("q={}", urlencoding::encode(query)));
    }
    if let Some(kind) = state.kind {
        parts.push(format!("kind={kind}"));
    }
    if state.sort != SortKey::default() {
        parts.push(format!("sort={}", state.sort.as_str()));
    }
    if page > 1 {
        parts.push(format!("page={page}"));
    }
    if parts.is_empty() {
        "/".to_string()
    } else {
        format!("/?{}", parts.join("&"))
    }
}

fn poster_url(item: &LibraryItem) -> String {
    match &item.poster_url {
        Some(url) if !url.is_empty() => url.clone(),
        _ => format!("https://st.kp.yandex.net/images/film_big/{}.jpg", item.id),
    }
}

fn kind_label(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Movie => "Фильм",
        ItemKind::Series => "Сериал",
        ItemKind::Cartoon => "Мультфильм",
        ItemKind::Anime => "Аниме",
    }
}

fn top_bar(state: &ListState) -> String {
    let current_kind = state.kind.map(ItemKind::as_str).unwrap_or("");
    let kind_option = |value: &str, label: &str| {
        let selected = if current_kind == value { " selected" } else { "" };
        format!("<option value=\"{value}\"{selected}>{label}</option>")
    };
    let sort_option = |value: &str, label: &str| {
        let selected = if state.sort.as_str() == value {
            " selected"
        } else {
            ""
        };
        format!("<option value=\"{value}\"{selected}>{label}</option>")
    };

    // The form carries no page field, so submitting always lands on page 1.
    format!(
        "<header class=\"topbar\"><a href=\"/\"><strong>Кинотека</strong></a>\
         <form method=\"get\" action=\"/\" class=\"topbar\" style=\"padding:0;border:0;position:static\">\
         <input type=\"text\" name=\"q\" value=\"{q}\" placeholder=\"Поиск...\">\
         <select name=\"kind\">{kinds}</select>\
         <select name=\"sort\">{sorts}</select>\
         <button type=\"submit\">OK</button></form></header>",
        q = esc(&state.query),
        kinds = [
            kind_option("", "Все"),
            kind_option("movie", "Фильмы"),
            kind_option("series", "Сериалы"),
            kind_option("cartoon", "Мультфильмы"),
            kind_option("anime", "Аниме"),
        ]
        .join(""),
        sorts = [
            sort_option("added", "По дате добавления"),
            sort_option("title", "По названию"),
        ]
        .join(""),
    )
}

fn card(item: &LibraryItem) -> String {
    let derived = title::derive(&item.title, item.year);
    let year = derived
        .year
        .map(|y| format!("<div class=\"sub\">{y}</div>"))
        .unwrap_or_default();
    format!(
        "<a class=\"card\" href=\"/item/{id}\">\
         <img src=\"{poster}\" alt=\"{title}\" loading=\"lazy\">\
         <div class=\"meta\"><div class=\"title\">{title}</div>\
         <div class=\"sub\">&#9733; {rating:.1}</div>{year}</div></a>",
        id = item.id,
        poster = esc(&poster_url(item)),
        title = esc(&derived.title),
        rating = item.rating_or_zero(),
    )
}

fn pager(state: &ListState, page_count: usize) -> String {
    if page_count <= 1 {
        return String::new();
    }
    let links: Vec<String> = (1..=page_count)
        .map(|p| {
            if p == state.page {
                format!("<span class=\"current\">{p}</span>")
            } else {
                format!("<a href=\"{}\">{p}</a>", esc(&list_url(state, p)))
            }
        })
        .collect();
    format!("<nav class=\"pager\">{}</nav>", links.join(""))
}

/// The library list page.
pub fn library_page(state: &ListState, page: &ListPage<'_>) -> String {
    let body = if page.total == 0 {
        "<div class=\"empty\">Библиотека пуста</div>".to_string()
    } else {
        let cards: Vec<String> = page.items.iter().map(|item| card(item)).collect();
        format!(
            "<div class=\"grid\">{}</div>{}",
            cards.join(""),
            pager(state, page.page_count)
        )
    };
    page_shell(
        "Кинотека",
        &format!("{}<main>{body}</main>", top_bar(state)),
    )
}

fn chip(text: &str) -> String {
    format!("<span class=\"chip\">{}</span>", esc(text))
}

/// The item detail page.
pub fn item_page(item: &LibraryItem) -> String {
    let derived = title::derive(&item.title, item.year);
    let mut info = String::new();

    info.push_str(&format!("<h1>{}</h1>", esc(&derived.title)));

    let mut chips = vec![chip(kind_label(item.kind))];
    chips.push(format!(
        "<a class=\"watch\" href=\"https://t.me/neomovies_tg_bot?start=get_{}\" \
         target=\"_blank\" rel=\"noopener noreferrer\">Смотреть</a>",
        item.id
    ));
    if let Some(y) = derived.year {
        chips.push(chip(&y.to_string()));
    }
    if let Some(n) = item.seasons_count.filter(|n| *n > 0) {
        chips.push(chip(&format!("{n} сезон(ов)")));
    }
    if let Some(n) = item.episodes_count.filter(|n| *n > 0) {
        chips.push(chip(&format!("{n} эпизодов")));
    }
    info.push_str(&format!("<div class=\"chips\">{}</div>", chips.join("")));

    if item.kind.is_series_like() {
        let mut vq = Vec::new();
        if let Some(voice) = item.voice.as_deref().filter(|v| !v.trim().is_empty()) {
            vq.push(chip(&format!("Озвучка: {voice}")));
        }
        if let Some(quality) = item.quality.as_deref().filter(|q| !q.trim().is_empty()) {
            vq.push(chip(&format!("Качество: {quality}")));
        }
        if !vq.is_empty() {
            info.push_str(&format!("<div class=\"chips\">{}</div>", vq.join("")));
        }
    }

    let rating = item.rating_or_zero();
    if rating > 0.0 {
        info.push_str(&format!(
            "<div class=\"section\"><h3>Рейтинг</h3><div class=\"rating\">{rating:.1}</div></div>"
        ));
    }

    if !item.genres.is_empty() {
        let chips: Vec<String> = item.genres.iter().map(|g| chip(g)).collect();
        info.push_str(&format!(
            "<div class=\"section\"><h3>Жанры</h3><div class=\"chips\">{}</div></div>",
            chips.join("")
        ));
    }

    if let Some(overview) = item.overview.as_deref().filter(|o| !o.is_empty()) {
        info.push_str(&format!(
            "<div class=\"section\"><h3>Описание</h3><p>{}</p></div>",
            esc(overview)
        ));
    }

    if !item.voices.is_empty() {
        let chips: Vec<String> = item.voices.iter().map(|v| chip(v)).collect();
        info.push_str(&format!(
            "<div class=\"section\"><h3>Доступные озвучки</h3><div class=\"chips\">{}</div></div>",
            chips.join("")
        ));
    }

    if item.kind.is_series_like() {
        let badges = diff_overrides(
            item.voice.as_deref(),
            item.quality.as_deref(),
            &item.seasons,
        );
        if !badges.is_empty() {
            let chips: Vec<String> = badges.iter().map(|b| chip(&b.label())).collect();
            info.push_str(&format!(
                "<div class=\"section\"><h3>Отличия по сериям</h3><div class=\"chips\">{}</div></div>",
                chips.join("")
            ));
        }
    }

    let body = format!(
        "<main><nav style=\"margin-bottom:16px\"><a href=\"/\">Кинотека</a> / {title}</nav>\
         <div class=\"detail\"><img class=\"poster\" src=\"{poster}\" alt=\"{title}\">\
         <div class=\"info\">{info}</div></div></main>",
        title = esc(&derived.title),
        poster = esc(&poster_url(item)),
    );
    page_shell(&derived.title, &body)
}

/// A small standalone error page.
pub fn error_page(title: &str, message: &str) -> String {
    page_shell(
        title,
        &format!(
            "<main><div class=\"error\"><h1>{}</h1><p>{}</p>\
             <p><a href=\"/\">&larr; Кинотека</a></p></div></main>",
            esc(title),
            esc(message)
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(esc("<b>&\"'"), "&lt;b&gt;&amp;&quot;&#39;");
    }

    #[test]
    fn list_url_omits_defaults() {
        let state = ListState::default();
        assert_eq!(list_url(&state, 1), "/");
        assert_eq!(list_url(&state, 3), "/?page=3");
    }

    #[test]
    fn list_url_encodes_query_and_keeps_filters() {
        let state = ListState::default()
            .with_query("война и мир")
            .with_kind(Some(ItemKind::Series))
            .with_sort(SortKey::Title);
        let url = list_url(&state, 2);
        assert!(url.contains("kind=series"));
        assert!(url.contains("sort=title"));
        assert!(url.contains("page=2"));
        assert!(!url.contains(' '));
    }

    #[test]
    fn poster_falls_back_to_kp_static() {
        let item: LibraryItem =
            serde_json::from_str(r#"{"kp_id": 301, "type": "movie", "title": "X"}"#).unwrap();
        assert_eq!(
            poster_url(&item),
            "https://st.kp.yandex.net/images/film_big/301.jpg"
        );
    }
}
