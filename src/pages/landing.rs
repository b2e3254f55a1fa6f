use log::info;
use yew::prelude::*;

use crate::sections::achievements::{Achievement, AchievementsSection};
use crate::sections::cta::CtaSection;
use crate::sections::faq::{FaqEntry, FaqSection};
use crate::sections::features::{ComparisonRow, Feature, FeaturesSection};
use crate::sections::footer::Footer;
use crate::sections::hero::HeroSection;
use crate::sections::partner::{PartnerInfo, PartnerSection};
use crate::sections::problem::{ProblemItem, ProblemSection};
use crate::sections::solution::SolutionSection;
use crate::sections::team::{TeamMember, TeamSection};

#[function_component(Landing)]
pub fn landing() -> Html {
    use_effect_with_deps(
        move |_| {
            info!("Rendering landing page");
            || ()
        },
        (),
    );

    let problems = vec![
        ProblemItem {
            icon_path: "/images/kyoikutanto.svg",
            title: "教育担当の負担",
            description: "教育に時間を奪われて、本業に集中できていない。教材制作を行う余裕もない。",
        },
        ProblemItem {
            icon_path: "/images/ichininmae.svg",
            title: "若手が育たない",
            description: "技能習得に時間がかかる。質問できず、自信をなくして辞めていく人も。",
        },
        ProblemItem {
            icon_path: "/images/kyoiku.svg",
            title: "不揃いな教育",
            description: "現場任せの教育で標準化できていない。若手が育っているか判断できない。",
        },
    ];

    let features = vec![
        Feature {
            icon_src: "/images/douga.svg",
            title: "学習教材の自動生成",
            description: "作業風景を撮影すると、AIがベテランの動きを解析し、研修動画を生成します。作業マニュアルも生成可能です。",
        },
        Feature {
            icon_src: "/images/mentor.svg",
            title: "AIメンタリング機能",
            description: "AIメンターが疑問の解消や、クイズを通した理解定着の判断、ベテランとの違いを説明します。",
        },
        Feature {
            icon_src: "/images/data.svg",
            title: "教材自動更新・補足",
            description: "学習者の理解度や各種データに応じて、教材の再編集や補足動画の生成を自動的に行います。",
        },
    ];

    let comparison = vec![
        ComparisonRow {
            feature: "教材作成の手軽さ",
            training_company: "専門スタッフが必要",
            existing_lms: "手動で作成",
            skillon: "スマホ撮影のみ",
        },
        ComparisonRow {
            feature: "コスト",
            training_company: "高額（数百万円〜）",
            existing_lms: "中程度",
            skillon: "低コスト",
        },
        ComparisonRow {
            feature: "教材更新",
            training_company: "都度依頼が必要",
            existing_lms: "手動更新",
            skillon: "AI自動更新",
        },
        ComparisonRow {
            feature: "学習サポート",
            training_company: "限定的",
            existing_lms: "基本機能のみ",
            skillon: "AIメンター常時対応",
        },
        ComparisonRow {
            feature: "導入期間",
            training_company: "数ヶ月",
            existing_lms: "1〜2ヶ月",
            skillon: "即日利用可能",
        },
    ];

    let partner_info = PartnerInfo {
        target: vec![
            "製造業・建設業の企業",
            "現場教育に課題を感じている企業",
            "技術継承を推進したい企業",
        ],
        fields: vec![
            "製造現場の作業教育",
            "建設現場の安全教育",
            "メンテナンス作業の技術継承",
        ],
        schedule: "2025年1月〜3月（3ヶ月間のPoC実施）",
        conditions: vec![
            "月1回のフィードバックミーティングへの参加",
            "実際の現場での試用と評価",
            "改善提案へのご協力",
        ],
    };

    let members = vec![
        TeamMember {
            name: "梅田 旭太朗",
            role: "CEO",
            bio: vec![
                "九州大学工学府量子物理学専攻修了。",
                "大手外資系IT企業にて、製造業のDXプロジェクトや生成AIを活用した新規事業創造支援を担当。",
            ],
        },
        TeamMember {
            name: "成瀬 大毅",
            role: "CTO",
            bio: vec![
                "東京大学情報理工学系研究科修了。",
                "ドイツでのAI研究を経て、GAFA日本法人にてエンタープライズのアプリケーション開発支援を担当。",
            ],
        },
        TeamMember {
            name: "鴇田 悠",
            role: "CAIO",
            bio: vec![
                "京都大学情報学研究科修了。",
                "ゲームAIで世界一の記録を持つ。GAFA日本法人にてパートナー企業の育成を担当。",
            ],
        },
        TeamMember {
            name: "大野 亮太",
            role: "AI/ML",
            bio: vec![
                "東京大学工学系研究科修了。",
                "自動運転スタートアップを経て、GAFA日本法人にて製造業の数理最適化やDX支援を担当。",
            ],
        },
    ];

    let achievements = vec![Achievement {
        program_name: "品川ソーシャルイノベーションアクセラレーター採択",
        year: "2025年",
        logo_src: "/images/image.png",
        link: Some("https://shinagawa-startup.com/2025/"),
    }];

    let faqs = vec![
        FaqEntry {
            question: "PoCに参加するための費用はかかりますか？",
            answer: "PoC期間中は無償でご利用いただけます。フィードバックをいただくことで、より良いプロダクトを共創していきたいと考えています。",
        },
        FaqEntry {
            question: "どのような業種・業界が対象ですか？",
            answer: "製造業、建設業を中心に、現場での作業教育が必要な業種であればご参加いただけます。具体的な業務内容についてはお気軽にご相談ください。",
        },
        FaqEntry {
            question: "必要な機材はありますか？",
            answer: "スマートフォン（iOS/Android）があれば利用可能です。特別な機材は必要ありません。",
        },
        FaqEntry {
            question: "PoC期間中のサポート体制は？",
            answer: "専任の担当者が導入から運用までサポートします。月1回のミーティングに加え、チャットでの質問対応も行います。",
        },
        FaqEntry {
            question: "PoC終了後はどうなりますか？",
            answer: "PoC終了後、継続利用をご希望の場合は正式契約に移行いただけます。料金プランについては個別にご相談させていただきます。",
        },
    ];

    html! {
        <div class="landing-page">
            <a class="skip-link" href="#main-content">{"メインコンテンツへスキップ"}</a>
            <main id="main-content">
                <HeroSection
                    title={html! {
                        <>
                            {"現場の暗黙知を、"}
                            <br />
                            {"誰でも学べる形式知へ"}
                        </>
                    }}
                    subtitle={"スマートフォンで撮影した作業風景から、自動的に研修動画や学習教材を生成。現場教育の負担を軽減し、技術継承を加速します。".to_string()}
                    cta_text={"まずは担当者に相談してみる".to_string()}
                    cta_link={"#cta".to_string()}
                />

                <ProblemSection
                    problems={problems}
                    social_benefit={"技術継承の課題は、日本の製造業や建設業において深刻化しています。2030年には熟練技術者の約30%が退職すると予測されており、早急な対策が求められています。".to_string()}
                />

                <SolutionSection
                    concept={"SkillONは、スマートフォンで撮影した作業風景を自動解析し、研修動画や学習教材を生成します。AIが作業手順を認識し、重要なポイントを抽出。誰でも簡単に、質の高い教育コンテンツを作成できます。".to_string()}
                    highlights={vec![
                        "スマホ撮影だけで教材作成",
                        "AI自動解析で手順を抽出",
                        "教育コンテンツの標準化",
                    ]}
                    before_video_url={Some("https://www.youtube.com/embed/AETVeN4G6O0")}
                    after_video_url={Some("https://www.youtube.com/embed/Crf94djix8g")}
                />

                <FeaturesSection features={features} comparison={comparison} />

                <PartnerSection info={partner_info} />

                <TeamSection members={members} />

                <AchievementsSection achievements={achievements} />

                <CtaSection />

                <FaqSection faqs={faqs} />

                <Footer />
            </main>
            <style>
                {r#"
                .landing-page {
                    min-height: 100vh;
                    font-family: "Hiragino Kaku Gothic ProN", "Hiragino Sans", Meiryo,
                        -apple-system, BlinkMacSystemFont, "Segoe UI", sans-serif;
                    color: #111827;
                }

                .landing-page * {
                    margin: 0;
                    box-sizing: border-box;
                }

                .skip-link {
                    position: absolute;
                    left: -9999px;
                    top: 1rem;
                    z-index: 50;
                    padding: 0.5rem 1rem;
                    background: #f97d0b;
                    color: #fff;
                    border-radius: 8px;
                    text-decoration: none;
                }

                .skip-link:focus {
                    left: 1rem;
                    outline: 2px solid #fff;
                }

                .section-container {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 0 1.5rem;
                }

                .section-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #3791e2;
                    text-align: center;
                    margin-bottom: 2.5rem;
                }

                .cta-button {
                    display: inline-flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 600;
                    border-radius: 8px;
                    text-decoration: none;
                    cursor: pointer;
                    transition: background 0.3s ease, color 0.3s ease, transform 0.2s ease,
                        box-shadow 0.3s ease;
                }

                .cta-button:hover {
                    transform: scale(1.05);
                }

                .cta-button:active {
                    transform: scale(0.95);
                }

                .cta-button:focus-visible {
                    outline: 2px solid #f97d0b;
                    outline-offset: 2px;
                }

                .cta-button-primary {
                    background: #f97d0b;
                    color: #fff;
                }

                .cta-button-primary:hover {
                    background: #e06d00;
                }

                .cta-button-secondary {
                    background: transparent;
                    border: 2px solid #f97d0b;
                    color: #f97d0b;
                }

                .cta-button-secondary:hover {
                    background: #f97d0b;
                    color: #fff;
                }

                .cta-button-sm {
                    padding: 0.5rem 1rem;
                    font-size: 0.8rem;
                }

                .cta-button-md {
                    padding: 0.5rem 1rem;
                    font-size: 0.9rem;
                }

                .cta-button-lg {
                    padding: 0.75rem 1.5rem;
                    font-size: 1rem;
                }

                @media (min-width: 768px) {
                    .section-title {
                        font-size: 2rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}
