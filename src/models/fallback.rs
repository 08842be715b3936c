//! Built-in dataset used when the travel data file cannot be retrieved

use super::{Activity, Attraction, Dataset, DayPlan, Hotel, HotelFeatures};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

/// Fixed dataset with two hotels, one day and one attraction, enough to fill
/// every region including the comparison table.
#[must_use]
pub fn fallback_dataset() -> Dataset {
    Dataset {
        hotels: vec![
            Hotel {
                id: "meiju".to_string(),
                name: "河源万绿湖渼居空中汤泉酒店".to_string(),
                kind: "4星级温泉酒店".to_string(),
                highlights: strings(&["空中温泉", "粉红沙滩", "亲子友好"]),
                features: HotelFeatures {
                    core_feature: "空中温泉体验，特色中药泡池、艾草桑拿，独特的粉红沙滩"
                        .to_string(),
                    room_types: "标准房、亲子房、主题房，房间面积28-60㎡".to_string(),
                    dining: "1间自助西餐厅".to_string(),
                    free_amenities: strings(&["儿童乐园", "儿童俱乐部", "健身房"]),
                    paid_amenities: strings(&["空中温泉", "桑拿", "水上乐园"]),
                },
                price: "中高档，性价比相对较高".to_string(),
                suitable: "追求新鲜感、注重温泉体验的家庭".to_string(),
                image: "images/meiju_hotel.jpg".to_string(),
            },
            Hotel {
                id: "lanputao".to_string(),
                name: "河源春沐源蓝葡萄酒店".to_string(),
                kind: "高端度假酒店".to_string(),
                highlights: strings(&["别墅套房", "一站式度假", "丰富娱乐"]),
                features: HotelFeatures {
                    core_feature: "坐拥整个春沐源小镇的旅游资源，一站式满足家庭度假的所有需求"
                        .to_string(),
                    room_types: "全为多卧套房/别墅，面积巨大（105-110㎡）".to_string(),
                    dining: "2间特色餐厅（中/日料）、咖啡厅、小食吧等".to_string(),
                    free_amenities: strings(&[
                        "无边际泳池",
                        "健身房",
                        "多种球场",
                        "图书馆",
                        "家庭影院",
                        "儿童乐园",
                        "种植采摘",
                    ]),
                    paid_amenities: strings(&[
                        "温泉（酒店外）",
                        "皮划艇",
                        "钓鱼",
                        "KTV",
                        "模拟高尔夫",
                    ]),
                },
                price: "高端，总价较高，但人均成本可能更合理".to_string(),
                suitable: "注重住宿品质和娱乐多样性的大家庭".to_string(),
                image: "images/lanputao_hotel.jpg".to_string(),
            },
        ],
        itinerary: vec![DayPlan {
            day: 1,
            date: "6月21日（周五）".to_string(),
            title: "出发、温泉初体验 & 湖畔悠闲".to_string(),
            activities: vec![
                Activity {
                    time: "14:00-16:30".to_string(),
                    activity: "深圳出发，自驾前往河源".to_string(),
                    location: "深圳 → 河源".to_string(),
                    notes: "长深高速(G25)为主，错开下班高峰".to_string(),
                },
                Activity {
                    time: "19:00-21:00".to_string(),
                    activity: "核心体验：空中温泉 & 粉红沙滩".to_string(),
                    location: "酒店2楼".to_string(),
                    notes: "必体验项目，拍照打卡".to_string(),
                },
            ],
        }],
        attractions: vec![Attraction {
            name: "万绿湖风景区".to_string(),
            level: "5A".to_string(),
            description: "华南第一湖，乘船游览湖中岛屿".to_string(),
            highlights: strings(&["水月湾", "龙凤岛", "恐龙步道"]),
            price: "1号线 198元/人".to_string(),
            duration: "4-5小时".to_string(),
            image: "images/wanlvhu_boat.jpg".to_string(),
        }],
    }
}
