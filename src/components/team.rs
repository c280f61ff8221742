use chrono::Utc;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use yew::prelude::*;

use crate::i18n::tr;
use crate::prefs::PrefsContext;
use crate::team::generate_team;

#[function_component(TeamGrid)]
pub fn team_grid() -> Html {
    let lang = use_context::<PrefsContext>().map(|p| p.lang).unwrap_or_default();
    // Roles are reshuffled on every page load.
    let team = use_state(|| {
        let seed = Utc::now().timestamp_millis() as u64;
        generate_team(&mut SmallRng::seed_from_u64(seed))
    });

    html! {
        <section id="team" class="team">
            <h2 class="section-title" data-i18n="section.team">{ tr(lang, "section.team") }</h2>
            <p class="section-desc" data-i18n="section.team.desc">{ tr(lang, "section.team.desc") }</p>
            <div id="team-grid" class="team-grid">
                { for team.iter().map(|member| html! {
                    <div class="card team-card" key={member.name}>
                        <div class="team-avatar">{ member.avatar }</div>
                        <h3>{ member.name }</h3>
                        <p class="role">{ member.role }</p>
                    </div>
                }) }
            </div>
        </section>
    }
}
