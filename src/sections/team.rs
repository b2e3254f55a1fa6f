use yew::prelude::*;

use crate::components::reveal::Reveal;

#[derive(Clone, PartialEq)]
pub struct TeamMember {
    pub name: &'static str,
    pub role: &'static str,
    pub bio: Vec<&'static str>,
}

#[derive(Properties, PartialEq)]
pub struct TeamProps {
    pub members: Vec<TeamMember>,
}

#[function_component(TeamSection)]
pub fn team_section(props: &TeamProps) -> Html {
    html! {
        <section class="team-section" aria-labelledby="team-section-title">
            <div class="section-container">
                <Reveal animation="fade">
                    <h2 id="team-section-title" class="section-title">
                        {"私たちのチーム"}
                    </h2>
                </Reveal>

                <Reveal animation="fade" delay={0.2}>
                    <div class="team-panel">
                        <div class="team-grid">
                            { for props.members.iter().map(|member| html! {
                                <div class="member-card" key={member.name}>
                                    <div class="member-header">
                                        <h3>{member.name}</h3>
                                        <p class="member-role">{member.role}</p>
                                    </div>
                                    <div class="member-bio">
                                        { for member.bio.iter().map(|line| html! {
                                            <p>{*line}</p>
                                        }) }
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </Reveal>
            </div>
            <style>
                {r#"
                .team-section {
                    background: #fff;
                    padding: 3rem 1rem;
                }

                .team-panel {
                    background: linear-gradient(135deg, #edf8ff, rgba(55, 145, 226, 0.05));
                    border-radius: 16px;
                    padding: 1.5rem;
                    box-shadow: 0 10px 24px rgba(0, 0, 0, 0.08);
                }

                .team-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                }

                .member-card {
                    background: #fff;
                    border-radius: 12px;
                    border-top: 4px solid #3791e2;
                    padding: 1.5rem;
                    box-shadow: 0 4px 10px rgba(0, 0, 0, 0.08);
                    transition: box-shadow 0.3s ease, transform 0.3s ease;
                    height: 100%;
                    display: flex;
                    flex-direction: column;
                }

                .member-card:hover {
                    box-shadow: 0 14px 28px rgba(0, 0, 0, 0.14);
                    transform: translateY(-4px);
                }

                .member-header {
                    margin-bottom: 0.75rem;
                }

                .member-header h3 {
                    font-size: 1.2rem;
                    font-weight: 700;
                    color: #111827;
                    text-align: center;
                    white-space: nowrap;
                    overflow: hidden;
                    text-overflow: ellipsis;
                }

                .member-role {
                    color: #f97d0b;
                    font-weight: 600;
                    text-align: center;
                    white-space: nowrap;
                }

                .member-bio {
                    flex: 1;
                }

                .member-bio p {
                    color: #374151;
                    line-height: 1.6;
                    font-size: 0.9rem;
                    margin-bottom: 0.2rem;
                }

                @media (min-width: 640px) {
                    .team-grid {
                        grid-template-columns: repeat(4, minmax(0, 1fr));
                    }
                }
                "#}
            </style>
        </section>
    }
}
