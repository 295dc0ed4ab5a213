use draftvision_api::FeedFilter;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct FilterBarProps {
    pub active: FeedFilter,
    pub on_select_filter: Callback<FeedFilter>,
}

#[function_component(FilterBar)]
pub fn filter_bar(p: &FilterBarProps) -> Html {
    let items = FeedFilter::ALL.into_iter().map(|f| {
        let is_active = (f == p.active).then(|| "active");
        let on_select_filter = p.on_select_filter.reform(move |_| f);
        html! {
            <li class="nav-item">
                <a
                    class={classes!("nav-link", is_active)}
                    href={format!("#filter-{}", f.as_str())}
                    onclick={on_select_filter}
                >
                    { f.label() }
                </a>
            </li>
        }
    });
    html! {
        <ul class="nav nav-pills mb-4">
            { for items }
        </ul>
    }
}
