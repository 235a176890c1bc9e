use axum::{response::Html, Router, routing::get};

use crate::feed::FEED_BASE_URL;

pub fn router() -> Router {
    Router::new().route("/", get(index))
}

async fn index() -> Html<String> {
    Html(INDEX_HTML.replace("__FEED_BASE_URL__", FEED_BASE_URL))
}

const INDEX_HTML: &str = r#"<!doctype html>
<html lang="en">
<head>
  <meta charset="utf-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1" />
  <title>Podcast RSS Search</title>
  <style>
    body { font-family: Arial, sans-serif; margin: 0; min-height: 100vh; background: #f9fafb; color: #111827;
           display: flex; align-items: center; justify-content: center; padding: 1rem; box-sizing: border-box; }
    main { width: 100%; max-width: 28rem; }
    h1 { text-align: center; margin-bottom: 0.25rem; }
    .subtitle { text-align: center; color: #4b5563; font-size: 0.9rem; margin-top: 0; }
    .search { display: flex; gap: 0.5rem; margin: 2rem 0; }
    .search input { flex: 1; padding: 0.5rem; border: 1px solid #d1d5db; border-radius: 6px; }
    button { padding: 0.5rem 1rem; border: 0; border-radius: 6px; background: #111827; color: #fff; cursor: pointer; }
    button:disabled { opacity: 0.5; cursor: default; }
    .card { background: #fff; border: 1px solid #e5e7eb; border-radius: 8px; padding: 1rem; margin-bottom: 1rem; }
    .card h3 { margin: 0 0 0.5rem; font-weight: 500; }
    .label { color: #6b7280; font-size: 0.85rem; margin: 0; }
    .link { background: #f9fafb; padding: 0.75rem; border-radius: 4px; word-break: break-all; font-size: 0.85rem; }
    .card button { width: 100%; }
    #toasts { position: fixed; bottom: 1rem; right: 1rem; display: flex; flex-direction: column; gap: 0.5rem; }
    .toast { background: #fff; border: 1px solid #e5e7eb; border-radius: 6px; padding: 0.75rem 1rem; min-width: 14rem;
             box-shadow: 0 2px 6px rgba(0,0,0,0.1); }
    .toast.destructive { background: #ef4444; color: #fff; border-color: #ef4444; }
    .toast strong { display: block; }
  </style>
</head>
<body>
  <main>
    <h1>Podcast RSS Search</h1>
    <p class="subtitle">Enter a podcast name to get its RSS feed link</p>

    <div class="search">
      <input id="keyword" placeholder="Podcast name" />
      <button id="searchBtn">Search</button>
    </div>

    <div id="results"></div>
  </main>
  <div id="toasts"></div>

  <script>
    const FEED_BASE_URL = '__FEED_BASE_URL__';
    const keywordInput = document.getElementById('keyword');
    const searchBtn = document.getElementById('searchBtn');
    const resultsEl = document.getElementById('results');
    const toastsEl = document.getElementById('toasts');

    let searchResults = [];
    let loading = false;
    let inFlight = null;

    const getRssLink = (seq) => `${FEED_BASE_URL}/${seq}/rss.xml`;

    function toast({ title, description, variant }) {
      const el = document.createElement('div');
      el.className = 'toast' + (variant === 'destructive' ? ' destructive' : '');
      const strong = document.createElement('strong');
      strong.textContent = title;
      el.appendChild(strong);
      if (description) {
        const span = document.createElement('span');
        span.textContent = description;
        el.appendChild(span);
      }
      toastsEl.appendChild(el);
      setTimeout(() => el.remove(), 4000);
    }

    function setLoading(value) {
      loading = value;
      searchBtn.disabled = value;
      searchBtn.textContent = value ? 'Searching...' : 'Search';
    }

    function render() {
      resultsEl.replaceChildren();
      for (const result of searchResults) {
        const card = document.createElement('div');
        card.className = 'card';
        const name = document.createElement('h3');
        name.textContent = result.name;
        const label = document.createElement('p');
        label.className = 'label';
        label.textContent = 'RSS link:';
        const link = document.createElement('p');
        link.className = 'link';
        link.textContent = getRssLink(result.seq);
        const copy = document.createElement('button');
        copy.textContent = 'Copy link';
        copy.addEventListener('click', () => copyToClipboard(getRssLink(result.seq)));
        card.append(name, label, link, copy);
        resultsEl.appendChild(card);
      }
    }

    async function handleSearch() {
      const keyword = keywordInput.value.trim();
      if (!keyword) {
        toast({ title: 'Please enter a keyword', variant: 'destructive' });
        return;
      }

      // A new search supersedes whatever is still running
      if (inFlight) inFlight.abort();
      const controller = new AbortController();
      inFlight = controller;

      setLoading(true);
      searchResults = [];
      render();

      try {
        const response = await fetch(`/api/search?q=${encodeURIComponent(keyword)}`, {
          signal: controller.signal,
        });
        const data = await response.json();

        if (data.error) {
          toast({ title: 'Search failed', description: data.error, variant: 'destructive' });
          return;
        }

        if (data.result && data.result.length > 0) {
          searchResults = data.result;
          render();
          if (!data.exactMatch) {
            toast({ title: 'Notice', description: 'No exact match found, showing related results' });
          }
        } else {
          toast({ title: 'No podcasts found', variant: 'destructive' });
        }
      } catch (error) {
        if (controller.signal.aborted) return;
        toast({ title: 'Search failed', description: 'Please try again later', variant: 'destructive' });
      } finally {
        if (inFlight === controller) {
          inFlight = null;
          setLoading(false);
        }
      }
    }

    async function copyToClipboard(rssLink) {
      try {
        await navigator.clipboard.writeText(rssLink);
        toast({ title: 'Copied' });
      } catch (error) {
        toast({ title: 'Copy failed', description: 'Please copy the link manually', variant: 'destructive' });
      }
    }

    searchBtn.addEventListener('click', handleSearch);
    keywordInput.addEventListener('keydown', (e) => {
      if (e.key === 'Enter') handleSearch();
    });
  </script>
</body>
</html>"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_index_embeds_feed_base() {
        let Html(page) = index().await;
        assert!(page.contains("const FEED_BASE_URL = 'https://podwise.ai/feed/podcasts';"));
        assert!(!page.contains("__FEED_BASE_URL__"));
    }

    #[tokio::test]
    async fn test_index_search_flow() {
        let Html(page) = index().await;
        // Blank input never reaches the proxy
        assert!(page.contains("const keyword = keywordInput.value.trim();"));
        // A new search aborts the one in flight
        assert!(page.contains("new AbortController()"));
        assert!(page.contains("/api/search?q=${encodeURIComponent(keyword)}"));
        assert!(page.contains("} finally {"));
    }
}
