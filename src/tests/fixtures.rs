// src/tests/fixtures.rs

pub const LISTING_URL: &str = "https://suumo.jp/ikkodate/tokyo/sc_shinjuku/nc_87706145/";

/// A detached-house detail page shaped like the real one, with every value
/// overridable.
pub struct ListingPage {
    pub section_title: String,
    pub posting_line: String,
    pub name: String,
    pub price: String,
    pub floor_plan: String,
    pub land_area: String,
    pub building_area: String,
    pub construction_date: String,
    pub address: String,
    pub traffic: Vec<String>,
}

impl Default for ListingPage {
    fn default() -> Self {
        Self {
            section_title: "物件詳細情報".to_string(),
            posting_line: "情報提供日：2024/5/10".to_string(),
            name: "サンプルハウス西新宿".to_string(),
            price: "5980万円".to_string(),
            floor_plan: "4LDK".to_string(),
            land_area: "120.5m2（36.45坪）".to_string(),
            building_area: "98.6m2".to_string(),
            construction_date: "2015年3月".to_string(),
            address: "東京都新宿区西新宿１".to_string(),
            traffic: vec![
                "JR山手線「新宿」徒歩10分".to_string(),
                "都営大江戸線「都庁前」徒歩7分".to_string(),
                "京王線「初台」徒歩12分".to_string(),
            ],
        }
    }
}

impl ListingPage {
    pub fn html(&self) -> String {
        let traffic = if self.traffic.is_empty() {
            "徒歩圏内に駅なし".to_string()
        } else {
            self.traffic
                .iter()
                .map(|line| format!("<div>{line}</div>"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            r#"<!DOCTYPE html>
<html lang="ja">
<head><meta charset="utf-8"><title>{name}｜中古一戸建て</title></head>
<body>
<div id="mainContents">
  <h1 class="mainIndex">{name}</h1>
  <div class="section">
    <div class="secTitleOuterR">
      <h3 class="secTitleInnerR">{section_title}</h3>
    </div>
    <table class="pCell10 bdCell">
      <tbody>
        <tr>
          <th class="w190"><div class="fl">物件名</div></th>
          <td colspan="3">{name}</td>
        </tr>
        <tr>
          <th><div class="fl">価格</div><div class="fr"><a href="/sim/">支払シミュレーション</a></div></th>
          <td colspan="3"><p class="mt7 b">{price}</p><p>※価格は税込みです</p></td>
        </tr>
        <tr>
          <th><div class="fl">間取り</div></th>
          <td>{floor_plan}</td>
          <th><div class="fl">土地面積</div></th>
          <td>{land_area}</td>
        </tr>
        <tr>
          <th><div class="fl">建物面積</div></th>
          <td>{building_area}</td>
          <th><div class="fl">築年月</div></th>
          <td>{construction_date}</td>
        </tr>
        <tr>
          <th><div class="fl">住所</div></th>
          <td colspan="3"><p>{address}</p><p class="mt5"><a href="/map/">地図を見る</a></p></td>
        </tr>
        <tr>
          <th><div class="fl">交通</div></th>
          <td colspan="3">
{traffic}
          </td>
        </tr>
      </tbody>
    </table>
  </div>
  <div class="mt10">
    <p class="fs10">{posting_line}</p>
    <p class="fs10">次回更新予定日：随時</p>
  </div>
</div>
</body>
</html>"#,
            name = self.name,
            section_title = self.section_title,
            price = self.price,
            floor_plan = self.floor_plan,
            land_area = self.land_area,
            building_area = self.building_area,
            construction_date = self.construction_date,
            address = self.address,
            traffic = traffic,
            posting_line = self.posting_line,
        )
    }
}
