//! Slug derivation for heroes and news posts.

/// Slug used when a news title has no transliterable characters.
pub const EMPTY_NEWS_SLUG: &str = "news";

/// Builds the slug of a hero name.
///
/// Uses the same folding as news titles but has no fallback, so a name without any
/// letter or digit yields an empty slug.
pub fn hero_slug(name: &str) -> String {
    kebab(name)
}

/// Builds the base slug of a news title. An empty result becomes `"news"`.
pub fn news_slug(title: &str) -> String {
    let slug = kebab(title);
    if slug.is_empty() {
        EMPTY_NEWS_SLUG.to_string()
    } else {
        slug
    }
}

/// Lower-kebab form accepted by the slug routes.
///
/// Vietnamese vowels with diacritics fold to their base letter and `đ` folds to `d`.
/// Anything outside `[a-z0-9]`, whitespace and `-` is dropped, whitespace becomes `-`,
/// dash runs collapse and leading or trailing dashes are trimmed.
fn kebab(value: &str) -> String {
    let mut slug = String::with_capacity(value.len());

    for c in value.chars().flat_map(char::to_lowercase) {
        let c = match fold_vietnamese(c) {
            c @ ('a'..='z' | '0'..='9') => c,
            '-' => '-',
            c if c.is_whitespace() => '-',
            _ => continue,
        };
        if c == '-' && slug.ends_with('-') {
            continue;
        }
        slug.push(c);
    }

    slug.trim_matches('-').to_string()
}

/// Appends the numeric suffix used to resolve slug collisions.
///
/// Attempt 1 is the bare slug, attempt 2 gives `slug-2` and so on.
pub fn with_suffix(base: &str, attempt: u32) -> String {
    if attempt <= 1 {
        base.to_string()
    } else {
        format!("{}-{}", base, attempt)
    }
}

fn fold_vietnamese(c: char) -> char {
    match c {
        'à' | 'á' | 'ạ' | 'ả' | 'ã' | 'â' | 'ầ' | 'ấ' | 'ậ' | 'ẩ' | 'ẫ' | 'ă' | 'ằ' | 'ắ'
        | 'ặ' | 'ẳ' | 'ẵ' => 'a',
        'è' | 'é' | 'ẹ' | 'ẻ' | 'ẽ' | 'ê' | 'ề' | 'ế' | 'ệ' | 'ể' | 'ễ' => 'e',
        'ì' | 'í' | 'ị' | 'ỉ' | 'ĩ' => 'i',
        'ò' | 'ó' | 'ọ' | 'ỏ' | 'õ' | 'ô' | 'ồ' | 'ố' | 'ộ' | 'ổ' | 'ỗ' | 'ơ' | 'ờ' | 'ớ'
        | 'ợ' | 'ở' | 'ỡ' => 'o',
        'ù' | 'ú' | 'ụ' | 'ủ' | 'ũ' | 'ư' | 'ừ' | 'ứ' | 'ự' | 'ử' | 'ữ' => 'u',
        'ỳ' | 'ý' | 'ỵ' | 'ỷ' | 'ỹ' => 'y',
        'đ' => 'd',
        other => other,
    }
}
