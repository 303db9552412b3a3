//! The single presentation page.

use leptos::*;

use culture_core::content::*;
use culture_core::FadeIn;

use crate::components::section::stagger;
use crate::components::{
    CultureChart, FloatingElements, GradientCard, NavBar, Reveal, RevealFrom, SectionWrapper,
    StatCounter,
};
use crate::state::use_site_config;
use crate::utils::{frame_interval, use_animation_clock, use_in_view};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="home">
            <NavBar/>
            <main>
                <Hero/>
                <Introduction/>
                <StatsBand/>
                <Influence/>
                <Leadership/>
                <Motivation/>
                <Risks/>
                <CaseStudies/>
                <Strategies/>
                <Conclusion/>
                <References/>
            </main>
            <Footer/>
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <FloatingElements/>
            <div class="container hero-content">
                <Reveal>
                    <span class="hero-badge">{HERO_BADGE}</span>
                </Reveal>
                <Reveal delay=0.2>
                    <h1 class="hero-title">
                        "Compreendendo a "
                        <span class="hero-highlight">{SITE_TITLE}</span>
                    </h1>
                </Reveal>
                <Reveal delay=0.4>
                    <p class="hero-lead">{HERO_LEAD}</p>
                </Reveal>
                <Reveal delay=0.6 class="hero-credits">
                    <p>{format!("Trabalho apresentado por: {}", AUTHORS.join(", "))}</p>
                    <p>{format!("Professor: {}", PROFESSOR)}</p>
                    <p>{format!("Data: {}", PRESENTED_ON)}</p>
                </Reveal>
            </div>
        </div>
    }
}

#[component]
fn SectionTitle(title: &'static str) -> impl IntoView {
    view! {
        <Reveal class="section-heading">
            <h2 class="section-title">{title}</h2>
            <div class="section-rule"></div>
        </Reveal>
    }
}

fn topic_cards(topics: &[Topic], class: &'static str) -> View {
    let animation = use_site_config().animation;
    topics
        .iter()
        .copied()
        .enumerate()
        .map(|(i, topic)| {
            view! {
                <Reveal delay=stagger(&animation, i)>
                    <GradientCard class=class>
                        <h3>{topic.title}</h3>
                        <p>{topic.text}</p>
                    </GradientCard>
                </Reveal>
            }
        })
        .collect_view()
}

fn paragraphs(texts: &[&'static str]) -> View {
    texts
        .iter()
        .map(|text| view! { <p class="section-text">{*text}</p> })
        .collect_view()
}

fn quote(topic: Topic) -> impl IntoView {
    view! {
        <Reveal from=RevealFrom::Left class="quote">
            <blockquote>
                <p>{topic.text}</p>
                <cite>{topic.title}</cite>
            </blockquote>
        </Reveal>
    }
}

#[component]
fn Introduction() -> impl IntoView {
    view! {
        <SectionWrapper id="introducao">
            <SectionTitle title="Introdução"/>
            <Reveal>{paragraphs(&INTRO_PARAGRAPHS)}</Reveal>
            {quote(INTRO_QUOTE)}
            <div class="card-grid three">{topic_cards(&PILLARS, "pillar-card")}</div>
        </SectionWrapper>
    }
}

#[component]
fn StatsBand() -> impl IntoView {
    let animation = use_site_config().animation;
    view! {
        <div class="stats-band">
            <div class="container stats-grid">
                {STATS
                    .into_iter()
                    .enumerate()
                    .map(|(i, stat)| view! { <StatCounter stat=stat delay=stagger(&animation, i)/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn Influence() -> impl IntoView {
    view! {
        <SectionWrapper id="influencia">
            <SectionTitle title="Influência da Cultura nos Projetos"/>
            <div class="two-columns">
                {CULTURE_PROFILES
                    .into_iter()
                    .enumerate()
                    .map(|(i, profile)| {
                        let from = if i == 0 { RevealFrom::Left } else { RevealFrom::Right };
                        view! {
                            <Reveal from=from>
                                <GradientCard accent=profile.accent class="profile-card">
                                    <h3>{profile.title}</h3>
                                    <p>{profile.text}</p>
                                    <ul class="trait-list">
                                        {profile
                                            .traits
                                            .into_iter()
                                            .map(|t| view! { <li>{t}</li> })
                                            .collect_view()}
                                    </ul>
                                </GradientCard>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <CultureChart/>
        </SectionWrapper>
    }
}

#[component]
fn Leadership() -> impl IntoView {
    view! {
        <SectionWrapper id="lideranca" class="alt">
            <SectionTitle title="Liderança e Cultura"/>
            <Reveal>{paragraphs(&LEADERSHIP_PARAGRAPHS)}</Reveal>
            <div class="card-grid two">{topic_cards(&COMPETENCIES, "competency-card")}</div>
        </SectionWrapper>
    }
}

#[component]
fn Motivation() -> impl IntoView {
    view! {
        <SectionWrapper id="motivacao">
            <SectionTitle title="Motivação e Engajamento"/>
            <Reveal>
                <p class="section-text">{MOTIVATION_TEXT}</p>
            </Reveal>
            <div class="card-grid three">{topic_cards(&MOTIVATION_FACTORS, "factor-card")}</div>
            {quote(MOTIVATION_QUOTE)}
        </SectionWrapper>
    }
}

#[component]
fn Risks() -> impl IntoView {
    view! {
        <SectionWrapper id="riscos" class="alt">
            <SectionTitle title="Cultura e Gestão de Riscos"/>
            <Reveal>{paragraphs(&RISK_PARAGRAPHS)}</Reveal>
            <Reveal from=RevealFrom::Right>
                <GradientCard class="highlight-card">
                    <h3>{RISK_HIGHLIGHT.title}</h3>
                    <p>{RISK_HIGHLIGHT.text}</p>
                    <p class="source">{RISK_HIGHLIGHT_SOURCE}</p>
                </GradientCard>
            </Reveal>
            <div class="card-grid three">{topic_cards(&RISK_CULTURES, "risk-card")}</div>
            <RiskMitigationBar/>
        </SectionWrapper>
    }
}

/// "Eficácia na mitigação de riscos" bar growing to its percentage
#[component]
fn RiskMitigationBar() -> impl IntoView {
    let animation = use_site_config().animation;
    let grow = FadeIn::new(1.0).with_delay(0.6);

    let node = create_node_ref::<html::Div>();
    let visible = use_in_view(node, animation.section_visibility_threshold);
    let elapsed = use_animation_clock(
        visible.into(),
        Some(grow.end_time()),
        frame_interval(animation.frame_interval_ms),
    );
    let width = move || {
        let p = grow.easing.apply(grow.progress(elapsed.get()));
        format!("width: {:.2}%;", RISK_MITIGATION_PERCENT * p)
    };

    view! {
        <div node_ref=node class="risk-mitigation">
            <div class="risk-mitigation-header">
                <span>"Eficácia na mitigação de riscos"</span>
                <span class="risk-mitigation-value">{format!("{}%", RISK_MITIGATION_PERCENT)}</span>
            </div>
            <div class="progress-track">
                <div class="progress-fill" style=width></div>
            </div>
            <p class="source">{RISK_MITIGATION_SOURCE}</p>
        </div>
    }
}

#[component]
fn CaseStudies() -> impl IntoView {
    let animation = use_site_config().animation;
    view! {
        <SectionWrapper id="estudos-caso">
            <SectionTitle title="Estudos de Caso"/>
            <div class="card-grid two">
                {CASE_STUDIES
                    .into_iter()
                    .enumerate()
                    .map(|(i, case)| {
                        let outcome = if case.succeeded { "success" } else { "failure" };
                        view! {
                            <Reveal delay=stagger(&animation, i)>
                                <GradientCard class=format!("case-card {}", outcome)>
                                    <h3>{case.title}</h3>
                                    <p>{case.text}</p>
                                    <p class="source">{case.source}</p>
                                </GradientCard>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
            <Reveal>
                <p class="section-summary">{CASE_STUDIES_SUMMARY}</p>
            </Reveal>
        </SectionWrapper>
    }
}

#[component]
fn Strategies() -> impl IntoView {
    view! {
        <SectionWrapper id="estrategias" class="alt">
            <SectionTitle title="Estratégias de Alinhamento"/>
            <Reveal>{paragraphs(&STRATEGY_INTRO)}</Reveal>
            <div class="card-grid three">{topic_cards(&STRATEGIES, "strategy-card")}</div>
            <Reveal>
                <p class="section-summary">{STRATEGY_SUMMARY}</p>
            </Reveal>
        </SectionWrapper>
    }
}

#[component]
fn Conclusion() -> impl IntoView {
    view! {
        <SectionWrapper id="conclusao">
            <SectionTitle title="Conclusão"/>
            <Reveal>
                <GradientCard class="conclusion-card">
                    <h3>{CONCLUSION_TITLE}</h3>
                    {paragraphs(&CONCLUSION_PARAGRAPHS)}
                </GradientCard>
            </Reveal>
            <Reveal class="conclusion-actions">
                <a href=PRESENTATION_PDF download="cultura-organizacional.pdf" class="button primary">
                    "Baixar Apresentação Completa"
                </a>
            </Reveal>
        </SectionWrapper>
    }
}

#[component]
fn References() -> impl IntoView {
    view! {
        <div class="references">
            <div class="container">
                <h2 class="section-title">"Referências Bibliográficas"</h2>
                <ol class="reference-list">
                    {REFERENCES
                        .into_iter()
                        .map(|reference| {
                            view! {
                                <li>
                                    <strong>{reference.lead}</strong>
                                    " "
                                    {reference.citation}
                                </li>
                            }
                        })
                        .collect_view()}
                </ol>
            </div>
        </div>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div>
                    <h3>{BRAND}</h3>
                    <p>{COURSE}</p>
                </div>
                <div>
                    <p>{format!("Autores: {}", AUTHORS.join(", "))}</p>
                    <p>{format!("Professor: {}", PROFESSOR)}</p>
                    <p>{format!("Apresentado em {}", PRESENTED_ON)}</p>
                </div>
                <p class="copyright">{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
